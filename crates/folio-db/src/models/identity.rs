//! Identity directory database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the identities mirror table
#[derive(Debug, Clone, FromRow)]
pub struct IdentityModel {
    pub identity_id: String,
    pub email: String,
    pub channel: String,
    pub confirmed_at: DateTime<Utc>,
}
