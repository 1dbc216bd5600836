//! Domain entities

mod account;
mod link;
mod profile;

pub use account::Account;
pub use link::Link;
pub use profile::{Profile, Project};
