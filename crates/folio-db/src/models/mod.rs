//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod identity;
mod link;
mod profile;

pub use account::AccountModel;
pub use identity::IdentityModel;
pub use link::LinkModel;
pub use profile::ProfileModel;
