//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod health;
pub mod identity;
pub mod links;
pub mod profiles;
pub mod users;
