//! Link database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for links table
#[derive(Debug, Clone, FromRow)]
pub struct LinkModel {
    pub account_id: String,
    pub link_id: String,
    pub title: String,
    pub url: String,
    pub position: i32,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
