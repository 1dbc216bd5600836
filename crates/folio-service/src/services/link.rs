//! Link service
//!
//! Owner-scoped create-or-update and soft deletion of profile links.

use chrono::Utc;
use folio_core::entities::Link;
use folio_core::error::DomainError;
use folio_core::value_objects::AccountId;
use tracing::{info, instrument};

use crate::dto::{LinkResponse, UpsertLinkRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Link service
pub struct LinkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LinkService<'a> {
    /// Create a new LinkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create or update a link owned by the caller.
    ///
    /// A client-supplied id targets that link, reviving it if it was
    /// soft-deleted; a missing id creates a new link under a generated id.
    #[instrument(skip(self, request), fields(account_id = %account_id))]
    pub async fn upsert_link(
        &self,
        account_id: &AccountId,
        request: UpsertLinkRequest,
    ) -> ServiceResult<LinkResponse> {
        let link_id = match request.link_id.as_deref().filter(|id| !id.trim().is_empty()) {
            Some(id) => id.to_string(),
            None => uuid::Uuid::new_v4().to_string(),
        };

        let link = match self.ctx.link_repo().find(account_id, &link_id).await? {
            Some(mut existing) => {
                existing.title = request.title;
                existing.url = request.url;
                existing.position = request.position;
                existing.is_deleted = false;
                existing.updated_at = Utc::now();
                existing
            }
            None => Link::new(
                account_id.clone(),
                link_id,
                request.title,
                request.url,
                request.position,
            ),
        };

        self.ctx.link_repo().upsert(&link).await?;
        info!(link_id = %link.link_id, "Link saved");

        Ok(LinkResponse::from(&link))
    }

    /// Soft-delete a link owned by the caller
    #[instrument(skip(self), fields(account_id = %account_id))]
    pub async fn delete_link(&self, account_id: &AccountId, link_id: &str) -> ServiceResult<()> {
        let deleted = self.ctx.link_repo().soft_delete(account_id, link_id).await?;
        if !deleted {
            return Err(DomainError::LinkNotFound(link_id.to_string()).into());
        }
        info!(link_id, "Link deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::memory_context;

    fn owner() -> AccountId {
        AccountId::new("sub-owner-1")
    }

    fn request(link_id: Option<&str>, title: &str, position: i32) -> UpsertLinkRequest {
        UpsertLinkRequest {
            link_id: link_id.map(str::to_string),
            title: title.to_string(),
            url: "https://example.com".to_string(),
            position,
        }
    }

    #[tokio::test]
    async fn test_missing_id_generates_one() {
        let ctx = memory_context();
        let service = LinkService::new(&ctx);

        let saved = service
            .upsert_link(&owner(), request(None, "Blog", 0))
            .await
            .unwrap();
        assert!(!saved.link_id.is_empty());
        assert!(uuid::Uuid::parse_str(&saved.link_id).is_ok());
    }

    #[tokio::test]
    async fn test_update_preserves_creation_time() {
        let ctx = memory_context();
        let service = LinkService::new(&ctx);

        let first = service
            .upsert_link(&owner(), request(Some("l1"), "Blog", 0))
            .await
            .unwrap();
        let second = service
            .upsert_link(&owner(), request(Some("l1"), "Renamed", 2))
            .await
            .unwrap();

        assert_eq!(second.link_id, "l1");
        assert_eq!(second.title, "Renamed");
        assert_eq!(second.position, 2);
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
    }

    #[tokio::test]
    async fn test_upsert_revives_soft_deleted_link() {
        let ctx = memory_context();
        let service = LinkService::new(&ctx);

        service
            .upsert_link(&owner(), request(Some("l1"), "Blog", 0))
            .await
            .unwrap();
        service.delete_link(&owner(), "l1").await.unwrap();
        assert!(ctx
            .link_repo()
            .find_active_by_account(&owner())
            .await
            .unwrap()
            .is_empty());

        service
            .upsert_link(&owner(), request(Some("l1"), "Blog again", 0))
            .await
            .unwrap();
        let active = ctx.link_repo().find_active_by_account(&owner()).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Blog again");
    }

    #[tokio::test]
    async fn test_delete_unknown_link_is_not_found() {
        let ctx = memory_context();
        let err = LinkService::new(&ctx)
            .delete_link(&owner(), "missing")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_LINK");
    }

    #[tokio::test]
    async fn test_delete_is_scoped_to_owner() {
        let ctx = memory_context();
        let service = LinkService::new(&ctx);

        service
            .upsert_link(&owner(), request(Some("l1"), "Blog", 0))
            .await
            .unwrap();
        let err = service
            .delete_link(&AccountId::new("sub-other-2"), "l1")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);

        let active = ctx.link_repo().find_active_by_account(&owner()).await.unwrap();
        assert_eq!(active.len(), 1);
    }
}
