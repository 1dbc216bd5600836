//! Entity to model mappers
//!
//! This module provides conversions between domain entities (folio-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - Helper functions for values that need an explicit wire form

mod account;
mod identity;
mod link;
mod profile;

pub use identity::{channel_from_str, channel_to_str};
