//! # folio-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Account, Link, Profile, Project};
pub use error::DomainError;
pub use traits::{
    AccountRepository, AssetUrlIssuer, DirectoryIdentity, IdentityDirectory, LinkRepository,
    ProfileRepository, RepoResult,
};
pub use value_objects::{AccountId, Handle, HandleParseError, SignupChannel};
