//! In-memory store implementations for service tests
//!
//! The full service layer runs against these through [`ServiceContext`], so
//! tests exercise the real merge and reconciliation paths without a database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use folio_common::BucketAssetUrls;
use folio_core::entities::{Account, Link, Profile};
use folio_core::error::DomainError;
use folio_core::traits::{
    AccountRepository, DirectoryIdentity, IdentityDirectory, LinkRepository, ProfileRepository,
    RepoResult,
};
use folio_core::value_objects::{AccountId, SignupChannel};

use super::context::{ServiceContext, ServiceContextBuilder};
use crate::dto::{PostConfirmationRequest, PreSignupRequest, UpsertProfileRequest};

#[derive(Default)]
pub struct InMemoryAccounts {
    rows: Mutex<HashMap<String, Account>>,
}

#[async_trait]
impl AccountRepository for InMemoryAccounts {
    async fn find_by_id(&self, id: &AccountId) -> RepoResult<Option<Account>> {
        Ok(self.rows.lock().unwrap().get(id.as_str()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn upsert(&self, account: &Account) -> RepoResult<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(account.id.as_str().to_string(), account.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryProfiles {
    rows: Mutex<HashMap<String, Profile>>,
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_handle(&self, handle: &str) -> RepoResult<Option<Profile>> {
        Ok(self.rows.lock().unwrap().get(handle).cloned())
    }

    async fn find_by_account(&self, account_id: &AccountId) -> RepoResult<Option<Profile>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.is_owned_by(account_id))
            .max_by_key(|p| p.updated_at)
            .cloned())
    }

    async fn upsert(&self, profile: &Profile) -> RepoResult<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(profile.handle.as_str().to_string(), profile.clone());
        Ok(())
    }
}

/// Vec-backed so insertion order survives, which the stable link sort needs
#[derive(Default)]
pub struct InMemoryLinks {
    rows: Mutex<Vec<Link>>,
}

#[async_trait]
impl LinkRepository for InMemoryLinks {
    async fn find(&self, account_id: &AccountId, link_id: &str) -> RepoResult<Option<Link>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|l| &l.account_id == account_id && l.link_id == link_id)
            .cloned())
    }

    async fn find_active_by_account(&self, account_id: &AccountId) -> RepoResult<Vec<Link>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|l| &l.account_id == account_id && !l.is_deleted)
            .cloned()
            .collect())
    }

    async fn upsert(&self, link: &Link) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|l| l.account_id == link.account_id && l.link_id == link.link_id)
        {
            Some(slot) => *slot = link.clone(),
            None => rows.push(link.clone()),
        }
        Ok(())
    }

    async fn soft_delete(&self, account_id: &AccountId, link_id: &str) -> RepoResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|l| &l.account_id == account_id && l.link_id == link_id)
        {
            Some(link) => {
                link.soft_delete();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct InMemoryDirectory {
    rows: Mutex<Vec<DirectoryIdentity>>,
    fail_lookups: bool,
}

impl InMemoryDirectory {
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_lookups: true,
        }
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryDirectory {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<DirectoryIdentity>> {
        if self.fail_lookups {
            return Err(DomainError::DirectoryError("simulated outage".to_string()));
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.email == email)
            .cloned())
    }

    async fn record(&self, identity: &DirectoryIdentity) -> RepoResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|i| i.identity_id == identity.identity_id)
        {
            Some(slot) => *slot = identity.clone(),
            None => rows.push(identity.clone()),
        }
        Ok(())
    }
}

fn context_with_directory(directory: Arc<dyn IdentityDirectory>) -> ServiceContext {
    ServiceContextBuilder::new()
        .account_repo(Arc::new(InMemoryAccounts::default()))
        .profile_repo(Arc::new(InMemoryProfiles::default()))
        .link_repo(Arc::new(InMemoryLinks::default()))
        .identity_directory(directory)
        .asset_urls(Arc::new(BucketAssetUrls::new(
            "folio-assets",
            "s3.amazonaws.com",
        )))
        .build()
        .unwrap()
}

/// Fresh context over empty in-memory stores
pub fn memory_context() -> ServiceContext {
    context_with_directory(Arc::new(InMemoryDirectory::default()))
}

/// Context whose identity directory fails every lookup
pub fn failing_directory_context() -> ServiceContext {
    context_with_directory(Arc::new(InMemoryDirectory::failing()))
}

/// Profile request with only the handle set
pub fn upsert_request(handle: &str) -> UpsertProfileRequest {
    UpsertProfileRequest {
        handle: handle.to_string(),
        full_name: None,
        title: None,
        bio: None,
        email: None,
        phone: None,
        favorite_color: None,
        date_of_birth: None,
        skills: None,
        social_links: None,
        projects: None,
        avatar_key: None,
        avatar_url: None,
        resume_key: None,
        resume_url: None,
        show_email: None,
        show_phone: None,
        show_resume: None,
    }
}

/// Bare direct-channel confirmation payload
pub fn confirmation_request(identity_id: &str, email: &str) -> PostConfirmationRequest {
    PostConfirmationRequest {
        identity_id: identity_id.to_string(),
        email: Some(email.to_string()),
        channel: SignupChannel::Direct,
        full_name: None,
        given_name: None,
        family_name: None,
        picture: None,
        handle: None,
        date_of_birth: None,
    }
}

/// Verified direct-channel pre-signup payload
pub fn pre_signup_request(identity_id: &str, email: &str) -> PreSignupRequest {
    PreSignupRequest {
        identity_id: identity_id.to_string(),
        email: email.to_string(),
        channel: SignupChannel::Direct,
        email_verified: true,
    }
}
