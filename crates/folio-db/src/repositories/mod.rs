//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in folio-core.
//! Each repository handles database operations for a specific domain entity.

mod account;
mod error;
mod identity;
mod link;
mod profile;

pub use account::PgAccountRepository;
pub use identity::PgIdentityDirectory;
pub use link::PgLinkRepository;
pub use profile::PgProfileRepository;
