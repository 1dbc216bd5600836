//! Service context - dependency container for services
//!
//! Holds the store implementations and collaborators needed by services.
//! Everything is constructor-injected behind trait objects, so tests can run
//! the full service layer against in-memory stores.

use std::sync::Arc;

use folio_core::traits::{
    AccountRepository, AssetUrlIssuer, IdentityDirectory, LinkRepository, ProfileRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    account_repo: Arc<dyn AccountRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    link_repo: Arc<dyn LinkRepository>,
    identity_directory: Arc<dyn IdentityDirectory>,
    asset_urls: Arc<dyn AssetUrlIssuer>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        link_repo: Arc<dyn LinkRepository>,
        identity_directory: Arc<dyn IdentityDirectory>,
        asset_urls: Arc<dyn AssetUrlIssuer>,
    ) -> Self {
        Self {
            account_repo,
            profile_repo,
            link_repo,
            identity_directory,
            asset_urls,
        }
    }

    /// Get the account repository
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the link repository
    pub fn link_repo(&self) -> &dyn LinkRepository {
        self.link_repo.as_ref()
    }

    /// Get the identity directory
    pub fn identity_directory(&self) -> &dyn IdentityDirectory {
        self.identity_directory.as_ref()
    }

    /// Get the asset URL issuer
    pub fn asset_urls(&self) -> &dyn AssetUrlIssuer {
        self.asset_urls.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("collaborators", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    account_repo: Option<Arc<dyn AccountRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    link_repo: Option<Arc<dyn LinkRepository>>,
    identity_directory: Option<Arc<dyn IdentityDirectory>>,
    asset_urls: Option<Arc<dyn AssetUrlIssuer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn link_repo(mut self, repo: Arc<dyn LinkRepository>) -> Self {
        self.link_repo = Some(repo);
        self
    }

    pub fn identity_directory(mut self, directory: Arc<dyn IdentityDirectory>) -> Self {
        self.identity_directory = Some(directory);
        self
    }

    pub fn asset_urls(mut self, issuer: Arc<dyn AssetUrlIssuer>) -> Self {
        self.asset_urls = Some(issuer);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.account_repo
                .ok_or_else(|| super::error::ServiceError::validation("account_repo is required"))?,
            self.profile_repo
                .ok_or_else(|| super::error::ServiceError::validation("profile_repo is required"))?,
            self.link_repo
                .ok_or_else(|| super::error::ServiceError::validation("link_repo is required"))?,
            self.identity_directory.ok_or_else(|| {
                super::error::ServiceError::validation("identity_directory is required")
            })?,
            self.asset_urls
                .ok_or_else(|| super::error::ServiceError::validation("asset_urls is required"))?,
        ))
    }
}
