//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use folio_core::entities::Profile;
use folio_core::error::DomainError;
use folio_core::traits::{ProfileRepository, RepoResult};
use folio_core::value_objects::AccountId;

use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation};

const PROFILE_COLUMNS: &str = r"
    handle, account_id, full_name, title, bio, skills, social_links, projects,
    avatar_key, avatar_url, resume_key, resume_url, email, phone,
    show_email, show_phone, show_resume, favorite_color, date_of_birth,
    created_at, updated_at
";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_handle(&self, handle: &str) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE handle = $1"
        ))
        .bind(handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_account(&self, account_id: &AccountId) -> RepoResult<Option<Profile>> {
        // An account may leave an older row behind after a handle change;
        // the most recently updated row is the live profile
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE account_id = $1 ORDER BY updated_at DESC LIMIT 1"
        ))
        .bind(account_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self, profile), fields(handle = %profile.handle))]
    async fn upsert(&self, profile: &Profile) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO profiles (handle, account_id, full_name, title, bio, skills,
                                  social_links, projects, avatar_key, avatar_url,
                                  resume_key, resume_url, email, phone,
                                  show_email, show_phone, show_resume, favorite_color,
                                  date_of_birth, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
            ON CONFLICT (handle) DO UPDATE SET
                account_id = EXCLUDED.account_id,
                full_name = EXCLUDED.full_name,
                title = EXCLUDED.title,
                bio = EXCLUDED.bio,
                skills = EXCLUDED.skills,
                social_links = EXCLUDED.social_links,
                projects = EXCLUDED.projects,
                avatar_key = EXCLUDED.avatar_key,
                avatar_url = EXCLUDED.avatar_url,
                resume_key = EXCLUDED.resume_key,
                resume_url = EXCLUDED.resume_url,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                show_email = EXCLUDED.show_email,
                show_phone = EXCLUDED.show_phone,
                show_resume = EXCLUDED.show_resume,
                favorite_color = EXCLUDED.favorite_color,
                date_of_birth = EXCLUDED.date_of_birth,
                updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(profile.handle.as_str())
        .bind(profile.account_id.as_str())
        .bind(&profile.full_name)
        .bind(&profile.title)
        .bind(&profile.bio)
        .bind(&profile.skills)
        .bind(Json(&profile.social_links))
        .bind(Json(&profile.projects))
        .bind(&profile.avatar_key)
        .bind(&profile.avatar_url)
        .bind(&profile.resume_key)
        .bind(&profile.resume_url)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(profile.show_email)
        .bind(profile.show_phone)
        .bind(profile.show_resume)
        .bind(&profile.favorite_color)
        .bind(&profile.date_of_birth)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::HandleTaken(profile.handle.as_str().to_string())
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
        assert_send_sync::<PgProfileRepository>();
    }
}
