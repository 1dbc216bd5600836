//! Profile database model

use chrono::{DateTime, Utc};
use folio_core::Project;
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::BTreeMap;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub handle: String,
    pub account_id: String,
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub social_links: Json<BTreeMap<String, String>>,
    pub projects: Json<Vec<Project>>,
    pub avatar_key: String,
    pub avatar_url: String,
    pub resume_key: Option<String>,
    pub resume_url: Option<String>,
    pub email: String,
    pub phone: String,
    pub show_email: bool,
    pub show_phone: bool,
    pub show_resume: bool,
    pub favorite_color: String,
    pub date_of_birth: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
