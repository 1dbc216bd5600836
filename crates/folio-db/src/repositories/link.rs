//! PostgreSQL implementation of LinkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use folio_core::entities::Link;
use folio_core::traits::{LinkRepository, RepoResult};
use folio_core::value_objects::AccountId;

use crate::models::LinkModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LinkRepository
#[derive(Clone)]
pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    /// Create a new PgLinkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    #[instrument(skip(self))]
    async fn find(&self, account_id: &AccountId, link_id: &str) -> RepoResult<Option<Link>> {
        let result = sqlx::query_as::<_, LinkModel>(
            r"
            SELECT account_id, link_id, title, url, position, is_deleted, created_at, updated_at
            FROM links
            WHERE account_id = $1 AND link_id = $2
            ",
        )
        .bind(account_id.as_str())
        .bind(link_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Link::from))
    }

    #[instrument(skip(self))]
    async fn find_active_by_account(&self, account_id: &AccountId) -> RepoResult<Vec<Link>> {
        let result = sqlx::query_as::<_, LinkModel>(
            r"
            SELECT account_id, link_id, title, url, position, is_deleted, created_at, updated_at
            FROM links
            WHERE account_id = $1 AND is_deleted = FALSE
            ORDER BY created_at
            ",
        )
        .bind(account_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Link::from).collect())
    }

    #[instrument(skip(self, link), fields(account_id = %link.account_id, link_id = %link.link_id))]
    async fn upsert(&self, link: &Link) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO links (account_id, link_id, title, url, position, is_deleted,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (account_id, link_id) DO UPDATE SET
                title = EXCLUDED.title,
                url = EXCLUDED.url,
                position = EXCLUDED.position,
                is_deleted = EXCLUDED.is_deleted,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(link.account_id.as_str())
        .bind(&link.link_id)
        .bind(&link.title)
        .bind(&link.url)
        .bind(link.position)
        .bind(link.is_deleted)
        .bind(link.created_at)
        .bind(link.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, account_id: &AccountId, link_id: &str) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE links
            SET is_deleted = TRUE, updated_at = NOW()
            WHERE account_id = $1 AND link_id = $2
            ",
        )
        .bind(account_id.as_str())
        .bind(link_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
