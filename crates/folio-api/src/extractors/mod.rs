//! Axum extractors for request handling
//!
//! Custom extractors for authentication and validation.

mod auth;
mod validated;

pub use auth::{AuthAccount, OptionalAuthAccount};
pub use validated::ValidatedJson;
