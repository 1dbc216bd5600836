//! Profile service
//!
//! Handles the profile upsert merge, public projections, the caller's
//! account snapshot, and handle availability checks.

use chrono::Utc;
use folio_core::entities::{Account, Profile};
use folio_core::error::DomainError;
use folio_core::value_objects::{AccountId, Handle};
use tracing::{info, instrument};

use crate::dto::mappers::project_profile;
use crate::dto::{
    AccountResponse, HandleCheckResponse, LinkItem, ProfileResponse, UpsertProfileRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::merge;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create or partially update the caller's profile.
    ///
    /// Fields absent from the request keep their stored values; the merge
    /// rules live in [`merge`]. The handle is globally unique and not
    /// stealable from another account.
    #[instrument(skip(self, request), fields(handle = %request.handle))]
    pub async fn upsert_profile(
        &self,
        account_id: &AccountId,
        claims_email: &str,
        request: UpsertProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        let handle = Handle::parse(&request.handle)
            .map_err(|e| DomainError::InvalidHandle(e.to_string()))?;

        let existing = self.ctx.profile_repo().find_by_handle(handle.as_str()).await?;
        if let Some(profile) = &existing {
            if !profile.is_owned_by(account_id) {
                return Err(DomainError::HandleTaken(handle.as_str().to_string()).into());
            }
        }

        self.upsert_account(account_id, claims_email, &handle, &request)
            .await?;

        let base = existing
            .unwrap_or_else(|| Profile::new(handle.clone(), account_id.clone()));
        let mut profile = self.apply_merge(&base, &request);
        profile.updated_at = Utc::now();

        self.ctx.profile_repo().upsert(&profile).await?;
        info!(handle = %profile.handle, "Profile saved");

        let links = self.projected_links(&profile.account_id).await?;
        let resume_url = self.fresh_resume_url(&profile);
        Ok(project_profile(&profile, links, true, resume_url))
    }

    /// Public projection of a profile (`GET /profiles/{handle}`)
    #[instrument(skip(self))]
    pub async fn public_profile(
        &self,
        handle: &str,
        requester: Option<&AccountId>,
    ) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_handle(handle)
            .await?
            .ok_or_else(|| DomainError::ProfileNotFound(handle.to_string()))?;

        let is_owner = requester.is_some_and(|id| profile.is_owned_by(id));
        let links = self.projected_links(&profile.account_id).await?;
        let resume_url = self.fresh_resume_url(&profile);

        Ok(project_profile(&profile, links, is_owner, resume_url))
    }

    /// Caller's account snapshot (`GET /users/me`)
    #[instrument(skip(self))]
    pub async fn current_account(&self, account_id: &AccountId) -> ServiceResult<AccountResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::AccountNotFound(account_id.clone()))?;

        Ok(AccountResponse::from(&account))
    }

    /// Handle availability check (`GET /username/check`)
    #[instrument(skip(self))]
    pub async fn handle_availability(
        &self,
        raw: Option<&str>,
    ) -> ServiceResult<HandleCheckResponse> {
        let raw = raw.ok_or_else(|| {
            ServiceError::validation("username query parameter is required")
        })?;
        let handle =
            Handle::parse(raw).map_err(|e| DomainError::InvalidHandle(e.to_string()))?;

        let taken = self
            .ctx
            .profile_repo()
            .find_by_handle(handle.as_str())
            .await?
            .is_some();

        Ok(HandleCheckResponse {
            available: !taken,
            username: handle.as_str().to_string(),
        })
    }

    /// Upsert the caller's account record for a profile submission.
    ///
    /// A missing account is created from the token claims; an existing one
    /// only gets `handle`, `profile_complete`, and an optionally submitted
    /// date of birth touched.
    async fn upsert_account(
        &self,
        account_id: &AccountId,
        claims_email: &str,
        handle: &Handle,
        request: &UpsertProfileRequest,
    ) -> ServiceResult<()> {
        let submitted_dob = request
            .date_of_birth
            .as_ref()
            .filter(|d| !d.is_empty())
            .cloned();

        let mut account = match self.ctx.account_repo().find_by_id(account_id).await? {
            Some(account) => account,
            None => Account::new(
                account_id.clone(),
                claims_email,
                request.full_name.clone().unwrap_or_default(),
            ),
        };

        account.handle = Some(handle.clone());
        account.profile_complete = true;
        if let Some(dob) = submitted_dob {
            account.date_of_birth = Some(dob);
        }
        account.touch();

        self.ctx.account_repo().upsert(&account).await?;
        Ok(())
    }

    /// Apply the per-field merge policy against the stored record
    fn apply_merge(&self, base: &Profile, request: &UpsertProfileRequest) -> Profile {
        let mut profile = base.clone();

        profile.full_name = merge::scalar(&base.full_name, request.full_name.as_ref());
        profile.title = merge::scalar(&base.title, request.title.as_ref());
        profile.bio = merge::scalar(&base.bio, request.bio.as_ref());
        profile.email = merge::scalar(&base.email, request.email.as_ref());
        profile.phone = merge::scalar(&base.phone, request.phone.as_ref());
        profile.favorite_color =
            merge::scalar(&base.favorite_color, request.favorite_color.as_ref());
        profile.date_of_birth =
            merge::optional_scalar(base.date_of_birth.as_ref(), request.date_of_birth.as_ref());

        profile.skills = merge::list(&base.skills, request.skills.as_ref());
        profile.social_links = merge::map(&base.social_links, request.social_links.as_ref());
        profile.projects = merge::list(&base.projects, request.projects.as_ref());

        profile.show_email = merge::flag(base.show_email, request.show_email);
        profile.show_phone = merge::flag(base.show_phone, request.show_phone);
        profile.show_resume = merge::flag(base.show_resume, request.show_resume);

        profile.avatar_url = merge::scalar(&base.avatar_url, request.avatar_url.as_ref());
        profile.avatar_key = merge::scalar(&base.avatar_key, request.avatar_key.as_ref());
        // A URL submitted without its storage key: recover the key when the
        // URL points into our bucket
        if request.avatar_key.is_none() {
            if let Some(url) = request.avatar_url.as_ref().filter(|u| !u.is_empty()) {
                if let Some(key) = self.ctx.asset_urls().extract_key(url) {
                    profile.avatar_key = key;
                }
            }
        }

        profile.resume_key =
            merge::optional_scalar(base.resume_key.as_ref(), request.resume_key.as_ref());
        if request.resume_key.is_none() {
            if let Some(url) = request.resume_url.as_ref() {
                if let Some(key) = self.ctx.asset_urls().extract_key(url) {
                    profile.resume_key = Some(key);
                }
            }
        }
        // Explicit non-blank submission wins verbatim; otherwise derive a
        // fresh URL from the key, since stored derived URLs expire
        profile.resume_url = match request.resume_url.as_ref().filter(|u| !u.trim().is_empty()) {
            Some(url) => Some(url.clone()),
            None => match profile.resume_key.as_deref().filter(|k| !k.is_empty()) {
                Some(key) => Some(self.ctx.asset_urls().download_url(key)),
                None => base.resume_url.clone(),
            },
        };

        profile
    }

    /// Non-deleted links sorted ascending by position; ties keep insertion
    /// order (the sort must stay stable)
    async fn projected_links(&self, account_id: &AccountId) -> ServiceResult<Vec<LinkItem>> {
        let mut links = self.ctx.link_repo().find_active_by_account(account_id).await?;
        links.sort_by_key(|l| l.position);
        Ok(links.iter().map(LinkItem::from).collect())
    }

    /// Resume URL as returned to clients: always re-derived from the key
    /// when one is known, because previously issued URLs expire
    fn fresh_resume_url(&self, profile: &Profile) -> Option<String> {
        match profile.resume_key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => Some(self.ctx.asset_urls().download_url(key)),
            None => profile.resume_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{memory_context, upsert_request};
    use folio_core::entities::Link;

    fn caller() -> AccountId {
        AccountId::new("sub-owner-1")
    }

    async fn seed_profile(ctx: &ServiceContext) -> ProfileResponse {
        let mut request = upsert_request("alice");
        request.full_name = Some("Alice".to_string());
        request.bio = Some("Systems engineer".to_string());
        request.skills = Some(vec!["Rust".to_string(), "Postgres".to_string()]);
        request.email = Some("alice@example.com".to_string());
        ProfileService::new(ctx)
            .upsert_profile(&caller(), "alice@example.com", request)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent() {
        let ctx = memory_context();
        let service = ProfileService::new(&ctx);

        let mut request = upsert_request("alice");
        request.bio = Some("hello".to_string());
        let first = service
            .upsert_profile(&caller(), "alice@example.com", request.clone())
            .await
            .unwrap();
        let second = service
            .upsert_profile(&caller(), "alice@example.com", request)
            .await
            .unwrap();

        assert_eq!(second.handle, first.handle);
        assert_eq!(second.bio, first.bio);
        assert_eq!(second.skills, first.skills);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
    }

    #[tokio::test]
    async fn test_omitted_and_empty_skills_preserve_stored_list() {
        let ctx = memory_context();
        seed_profile(&ctx).await;
        let service = ProfileService::new(&ctx);

        // Omitted entirely
        let saved = service
            .upsert_profile(&caller(), "alice@example.com", upsert_request("alice"))
            .await
            .unwrap();
        assert_eq!(saved.skills, vec!["Rust", "Postgres"]);

        // Explicit empty list also preserves
        let mut request = upsert_request("alice");
        request.skills = Some(Vec::new());
        let saved = service
            .upsert_profile(&caller(), "alice@example.com", request)
            .await
            .unwrap();
        assert_eq!(saved.skills, vec!["Rust", "Postgres"]);

        // Non-empty replaces
        let mut request = upsert_request("alice");
        request.skills = Some(vec!["Go".to_string()]);
        let saved = service
            .upsert_profile(&caller(), "alice@example.com", request)
            .await
            .unwrap();
        assert_eq!(saved.skills, vec!["Go"]);
    }

    #[tokio::test]
    async fn test_explicit_empty_bio_clears_but_omitted_preserves() {
        let ctx = memory_context();
        seed_profile(&ctx).await;
        let service = ProfileService::new(&ctx);

        let saved = service
            .upsert_profile(&caller(), "alice@example.com", upsert_request("alice"))
            .await
            .unwrap();
        assert_eq!(saved.bio, "Systems engineer");

        let mut request = upsert_request("alice");
        request.bio = Some(String::new());
        let saved = service
            .upsert_profile(&caller(), "alice@example.com", request)
            .await
            .unwrap();
        assert_eq!(saved.bio, "");
    }

    #[tokio::test]
    async fn test_handle_is_not_stealable() {
        let ctx = memory_context();
        seed_profile(&ctx).await;
        let service = ProfileService::new(&ctx);

        let other = AccountId::new("sub-intruder-2");
        let err = service
            .upsert_profile(&other, "other@example.com", upsert_request("alice"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "HANDLE_TAKEN");
    }

    #[tokio::test]
    async fn test_malformed_handle_is_rejected() {
        let ctx = memory_context();
        let service = ProfileService::new(&ctx);

        let err = service
            .upsert_profile(&caller(), "a@example.com", upsert_request("has space"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_HANDLE");
    }

    #[tokio::test]
    async fn test_email_visibility_gating() {
        let ctx = memory_context();
        seed_profile(&ctx).await;
        let service = ProfileService::new(&ctx);

        // Anonymous: show_email defaults to false, so no email
        let anon = service.public_profile("alice", None).await.unwrap();
        assert!(!anon.is_owner);
        assert!(anon.email.is_none());

        // Owner always sees it
        let owner_id = caller();
        let owner = service
            .public_profile("alice", Some(&owner_id))
            .await
            .unwrap();
        assert!(owner.is_owner);
        assert_eq!(owner.email.as_deref(), Some("alice@example.com"));

        // Anonymous sees it once the flag is on
        let mut request = upsert_request("alice");
        request.show_email = Some(true);
        service
            .upsert_profile(&owner_id, "alice@example.com", request)
            .await
            .unwrap();
        let anon = service.public_profile("alice", None).await.unwrap();
        assert_eq!(anon.email.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn test_deleted_links_never_projected() {
        let ctx = memory_context();
        seed_profile(&ctx).await;

        let owner = caller();
        ctx.link_repo()
            .upsert(&Link::new(owner.clone(), "l1", "Kept", "https://a.example", 0))
            .await
            .unwrap();
        let mut deleted = Link::new(owner.clone(), "l2", "Gone", "https://b.example", 1);
        deleted.soft_delete();
        ctx.link_repo().upsert(&deleted).await.unwrap();

        let projection = ProfileService::new(&ctx)
            .public_profile("alice", None)
            .await
            .unwrap();
        assert_eq!(projection.links.len(), 1);
        assert_eq!(projection.links[0].title, "Kept");
    }

    #[tokio::test]
    async fn test_link_order_is_stable_ascending() {
        let ctx = memory_context();
        seed_profile(&ctx).await;

        let owner = caller();
        for (id, title, position) in [
            ("l1", "third", 3),
            ("l2", "first-a", 1),
            ("l3", "first-b", 1),
            ("l4", "second", 2),
        ] {
            ctx.link_repo()
                .upsert(&Link::new(owner.clone(), id, title, "https://example.com", position))
                .await
                .unwrap();
        }

        let projection = ProfileService::new(&ctx)
            .public_profile("alice", None)
            .await
            .unwrap();
        let titles: Vec<&str> = projection.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["first-a", "first-b", "second", "third"]);
    }

    #[tokio::test]
    async fn test_avatar_key_extracted_from_bucket_url() {
        let ctx = memory_context();
        let service = ProfileService::new(&ctx);

        let mut request = upsert_request("alice");
        request.avatar_url =
            Some("https://folio-assets.s3.amazonaws.com/avatars/alice.png".to_string());
        service
            .upsert_profile(&caller(), "alice@example.com", request)
            .await
            .unwrap();

        let stored = ctx
            .profile_repo()
            .find_by_handle("alice")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.avatar_key, "avatars/alice.png");
    }

    #[tokio::test]
    async fn test_resume_url_rederived_from_key_on_read() {
        let ctx = memory_context();
        let service = ProfileService::new(&ctx);

        let mut request = upsert_request("alice");
        request.resume_key = Some("resumes/alice.pdf".to_string());
        service
            .upsert_profile(&caller(), "alice@example.com", request)
            .await
            .unwrap();

        let projection = service.public_profile("alice", None).await.unwrap();
        assert_eq!(
            projection.resume_url.as_deref(),
            Some("https://folio-assets.s3.amazonaws.com/resumes/alice.pdf")
        );
    }

    #[tokio::test]
    async fn test_resume_key_exposed_only_when_shown() {
        let ctx = memory_context();
        let service = ProfileService::new(&ctx);

        let mut request = upsert_request("alice");
        request.resume_key = Some("resumes/alice.pdf".to_string());
        service
            .upsert_profile(&caller(), "alice@example.com", request)
            .await
            .unwrap();

        let hidden = service.public_profile("alice", None).await.unwrap();
        assert!(hidden.resume_key.is_none());

        let mut request = upsert_request("alice");
        request.show_resume = Some(true);
        service
            .upsert_profile(&caller(), "alice@example.com", request)
            .await
            .unwrap();
        let shown = service.public_profile("alice", None).await.unwrap();
        assert_eq!(shown.resume_key.as_deref(), Some("resumes/alice.pdf"));
    }

    #[tokio::test]
    async fn test_unknown_handle_is_not_found() {
        let ctx = memory_context();
        let err = ProfileService::new(&ctx)
            .public_profile("ghost", None)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_handle_availability() {
        let ctx = memory_context();
        seed_profile(&ctx).await;
        let service = ProfileService::new(&ctx);

        // Too short
        let err = service.handle_availability(Some("ab")).await.unwrap_err();
        assert_eq!(err.status_code(), 400);

        // Missing parameter
        let err = service.handle_availability(None).await.unwrap_err();
        assert_eq!(err.status_code(), 400);

        let taken = service.handle_availability(Some("alice")).await.unwrap();
        assert!(!taken.available);

        let free = service
            .handle_availability(Some("valid_name-1"))
            .await
            .unwrap();
        assert!(free.available);
        assert_eq!(free.username, "valid_name-1");
    }

    #[tokio::test]
    async fn test_current_account_snapshot() {
        let ctx = memory_context();
        seed_profile(&ctx).await;
        let service = ProfileService::new(&ctx);

        let me = service.current_account(&caller()).await.unwrap();
        assert_eq!(me.user_id, "sub-owner-1");
        assert_eq!(me.username.as_deref(), Some("alice"));
        assert!(me.profile_complete);

        let err = service
            .current_account(&AccountId::new("sub-missing"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
