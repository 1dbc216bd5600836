//! Account database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for accounts table
#[derive(Debug, Clone, FromRow)]
pub struct AccountModel {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub handle: Option<String>,
    pub date_of_birth: Option<String>,
    pub profile_complete: bool,
    pub linked_identity_ids: Vec<String>,
    pub picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
