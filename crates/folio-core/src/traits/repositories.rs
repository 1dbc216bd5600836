//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Account, Link, Profile};
use crate::error::DomainError;
use crate::value_objects::{AccountId, SignupChannel};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: &AccountId) -> RepoResult<Option<Account>>;

    /// Find account by email (email is unique across accounts)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>>;

    /// Insert or fully replace an account
    async fn upsert(&self, account: &Account) -> RepoResult<()>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by handle (the primary key)
    async fn find_by_handle(&self, handle: &str) -> RepoResult<Option<Profile>>;

    /// Find the profile owned by an account
    async fn find_by_account(&self, account_id: &AccountId) -> RepoResult<Option<Profile>>;

    /// Insert or fully replace a profile
    async fn upsert(&self, profile: &Profile) -> RepoResult<()>;
}

// ============================================================================
// Link Repository
// ============================================================================

#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Find a link by owner and id, including soft-deleted entries
    async fn find(&self, account_id: &AccountId, link_id: &str) -> RepoResult<Option<Link>>;

    /// List an account's links, excluding soft-deleted entries
    async fn find_active_by_account(&self, account_id: &AccountId) -> RepoResult<Vec<Link>>;

    /// Insert or fully replace a link
    async fn upsert(&self, link: &Link) -> RepoResult<()>;

    /// Flag a link as deleted. Returns false when no such link exists.
    async fn soft_delete(&self, account_id: &AccountId, link_id: &str) -> RepoResult<bool>;
}

// ============================================================================
// Identity Directory
// ============================================================================

/// A pending or confirmed identity known to the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryIdentity {
    pub identity_id: AccountId,
    pub email: String,
    pub channel: SignupChannel,
}

/// Mirror of the identity provider's user directory, consulted during
/// signup to detect an existing account for the same email
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Find a confirmed identity by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<DirectoryIdentity>>;

    /// Record a confirmed identity in the mirror
    async fn record(&self, identity: &DirectoryIdentity) -> RepoResult<()>;
}

// ============================================================================
// Asset URLs
// ============================================================================

/// Issues public URLs for stored assets and recognizes its own URLs.
///
/// Derived download URLs expire, so callers re-derive from the stored key
/// on every read instead of persisting the URL.
pub trait AssetUrlIssuer: Send + Sync {
    /// Public download URL for a storage key
    fn download_url(&self, key: &str) -> String;

    /// Extract the storage key from a URL this issuer produced, if it is one
    fn extract_key(&self, url: &str) -> Option<String>;
}
