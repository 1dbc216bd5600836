//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use folio_core::Project;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Profile Responses
// ============================================================================

/// A link entry as projected onto a public profile
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LinkItem {
    pub title: String,
    pub url: String,
}

/// Profile projection, owner or anonymous view.
///
/// Contact fields are visibility-gated for non-owners; absent fields are
/// omitted from the JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub handle: String,
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub social_links: BTreeMap<String, String>,
    pub projects: Vec<Project>,
    pub avatar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub show_email: bool,
    pub show_phone: bool,
    pub show_resume: bool,
    pub favorite_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub is_owner: bool,
    pub links: Vec<LinkItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Handle availability response (`GET /username/check`)
#[derive(Debug, Serialize)]
pub struct HandleCheckResponse {
    pub available: bool,
    pub username: String,
}

// ============================================================================
// Account Responses
// ============================================================================

/// Caller's account snapshot (`GET /users/me`)
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    #[serde(rename = "fullname")]
    pub full_name: String,
    pub profile_complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

// ============================================================================
// Link Responses
// ============================================================================

/// Saved link response
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub link_id: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "order")]
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Per-dependency readiness checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: &'static str,
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

impl ReadinessResponse {
    pub fn ready(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ready" } else { "not_ready" },
            checks: HealthChecks {
                database: if db_healthy { "ok" } else { "unavailable" },
            },
        }
    }
}
