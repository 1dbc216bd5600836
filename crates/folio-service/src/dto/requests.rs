//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//!
//! Partial-update semantics hinge on key presence: every optional field is an
//! `Option` whose `None` means "not submitted", which the merge policy treats
//! differently from an explicit empty value.

use std::collections::BTreeMap;

use folio_core::{Project, SignupChannel};
use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Profile Requests
// ============================================================================

/// Profile create-or-update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, message = "Handle is required"))]
    pub handle: String,

    pub full_name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub favorite_color: Option<String>,
    pub date_of_birth: Option<String>,

    pub skills: Option<Vec<String>>,
    pub social_links: Option<BTreeMap<String, String>>,
    pub projects: Option<Vec<Project>>,

    pub avatar_key: Option<String>,
    pub avatar_url: Option<String>,
    pub resume_key: Option<String>,
    pub resume_url: Option<String>,

    pub show_email: Option<bool>,
    pub show_phone: Option<bool>,
    pub show_resume: Option<bool>,
}

/// Handle availability check query (`GET /username/check`)
#[derive(Debug, Clone, Deserialize)]
pub struct HandleCheckQuery {
    pub username: Option<String>,
}

// ============================================================================
// Link Requests
// ============================================================================

/// Link create-or-update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertLinkRequest {
    /// Client-supplied id; generated when absent
    pub link_id: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(
        length(min = 1, max = 2000, message = "URL must be 1-2000 characters"),
        custom(function = validate_link_url)
    )]
    pub url: String,

    /// Sort position
    #[serde(default, rename = "order")]
    pub position: i32,
}

fn validate_link_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::new("url_scheme")
            .with_message("URL must start with http:// or https://".into()))
    }
}

// ============================================================================
// Identity Webhook Requests
// ============================================================================

/// Pre-signup check payload from the identity provider
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PreSignupRequest {
    #[validate(length(min = 1, message = "Identity id is required"))]
    pub identity_id: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    pub channel: SignupChannel,

    #[serde(default)]
    pub email_verified: bool,
}

/// Post-confirmation payload from the identity provider
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostConfirmationRequest {
    #[validate(length(min = 1, message = "Identity id is required"))]
    pub identity_id: String,

    pub email: Option<String>,

    #[serde(default)]
    pub channel: SignupChannel,

    pub full_name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub picture: Option<String>,

    /// User-chosen handle; absent for social signups
    pub handle: Option<String>,
    pub date_of_birth: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_request(title: &str, url: &str) -> UpsertLinkRequest {
        UpsertLinkRequest {
            link_id: None,
            title: title.to_string(),
            url: url.to_string(),
            position: 0,
        }
    }

    #[test]
    fn test_link_request_accepts_http_and_https() {
        assert!(link_request("Blog", "https://example.com").validate().is_ok());
        assert!(link_request("Blog", "http://example.com").validate().is_ok());
    }

    #[test]
    fn test_link_request_rejects_other_schemes() {
        assert!(link_request("Blog", "ftp://example.com").validate().is_err());
        assert!(link_request("Blog", "javascript:alert(1)").validate().is_err());
    }

    #[test]
    fn test_link_request_rejects_empty_and_oversize() {
        assert!(link_request("", "https://example.com").validate().is_err());
        assert!(link_request(&"t".repeat(201), "https://example.com").validate().is_err());
        let long_url = format!("https://example.com/{}", "a".repeat(2000));
        assert!(link_request("Blog", &long_url).validate().is_err());
    }

    #[test]
    fn test_profile_request_distinguishes_absent_from_empty() {
        let omitted: UpsertProfileRequest =
            serde_json::from_str(r#"{"handle": "alice"}"#).unwrap();
        assert!(omitted.bio.is_none());
        assert!(omitted.skills.is_none());

        let explicit: UpsertProfileRequest =
            serde_json::from_str(r#"{"handle": "alice", "bio": "", "skills": []}"#).unwrap();
        assert_eq!(explicit.bio.as_deref(), Some(""));
        assert_eq!(explicit.skills.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_link_request_order_wire_name() {
        let req: UpsertLinkRequest = serde_json::from_str(
            r#"{"title": "Blog", "url": "https://example.com", "order": 3}"#,
        )
        .unwrap();
        assert_eq!(req.position, 3);
    }
}
