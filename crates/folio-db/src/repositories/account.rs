//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use folio_core::entities::Account;
use folio_core::error::DomainError;
use folio_core::traits::{AccountRepository, RepoResult};
use folio_core::value_objects::AccountId;

use crate::models::AccountModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of AccountRepository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &AccountId) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, email, full_name, handle, date_of_birth, profile_complete,
                   linked_identity_ids, picture_url, created_at, updated_at
            FROM accounts
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, email, full_name, handle, date_of_birth, profile_complete,
                   linked_identity_ids, picture_url, created_at, updated_at
            FROM accounts
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Account::from))
    }

    #[instrument(skip(self, account), fields(account_id = %account.id))]
    async fn upsert(&self, account: &Account) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO accounts (id, email, full_name, handle, date_of_birth, profile_complete,
                                  linked_identity_ids, picture_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                full_name = EXCLUDED.full_name,
                handle = EXCLUDED.handle,
                date_of_birth = EXCLUDED.date_of_birth,
                profile_complete = EXCLUDED.profile_complete,
                linked_identity_ids = EXCLUDED.linked_identity_ids,
                picture_url = EXCLUDED.picture_url,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(account.id.as_str())
        .bind(&account.email)
        .bind(&account.full_name)
        .bind(account.handle.as_ref().map(|h| h.as_str()))
        .bind(&account.date_of_birth)
        .bind(account.profile_complete)
        .bind(&account.linked_identity_ids)
        .bind(&account.picture_url)
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::DuplicateEmail("An account with this email already exists".to_string())
            })
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAccountRepository>();
    }
}
