//! PostgreSQL implementation of IdentityDirectory

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use folio_core::traits::{DirectoryIdentity, IdentityDirectory, RepoResult};

use crate::mappers::channel_to_str;
use crate::models::IdentityModel;

use super::error::map_db_error;

/// PostgreSQL-backed mirror of the identity provider's user directory
#[derive(Clone)]
pub struct PgIdentityDirectory {
    pool: PgPool,
}

impl PgIdentityDirectory {
    /// Create a new PgIdentityDirectory
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityDirectory for PgIdentityDirectory {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<DirectoryIdentity>> {
        let result = sqlx::query_as::<_, IdentityModel>(
            r"
            SELECT identity_id, email, channel, confirmed_at
            FROM identities
            WHERE email = $1
            ORDER BY confirmed_at
            LIMIT 1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DirectoryIdentity::from))
    }

    #[instrument(skip(self, identity), fields(identity_id = %identity.identity_id))]
    async fn record(&self, identity: &DirectoryIdentity) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO identities (identity_id, email, channel, confirmed_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (identity_id) DO UPDATE SET
                email = EXCLUDED.email,
                channel = EXCLUDED.channel
            ",
        )
        .bind(identity.identity_id.as_str())
        .bind(&identity.email)
        .bind(channel_to_str(identity.channel))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgIdentityDirectory>();
    }
}
