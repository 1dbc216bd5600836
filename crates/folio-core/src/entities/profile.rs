//! Profile entity - the public-facing record keyed by handle

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{AccountId, Handle};

/// A portfolio project entry embedded in a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Storage key for the project image, when one was uploaded
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_key: String,
}

/// Public-facing profile, keyed by its globally unique handle.
///
/// The handle is the primary key; `account_id` is a non-owning
/// back-reference to the account. Scalar fields default to the empty
/// string, collections to empty, matching the partial-merge rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub handle: Handle,
    pub account_id: AccountId,
    pub full_name: String,
    pub title: String,
    pub bio: String,
    pub skills: Vec<String>,
    /// Platform name -> URL
    pub social_links: BTreeMap<String, String>,
    pub projects: Vec<Project>,
    /// Storage key for the avatar (internal reference)
    pub avatar_key: String,
    /// Public avatar URL
    pub avatar_url: String,
    pub resume_key: Option<String>,
    /// Last stored resume URL. Derived URLs expire, so readers re-derive
    /// from `resume_key` whenever one is known.
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

impl Profile {
    /// Create an empty profile owned by an account
    pub fn new(handle: Handle, account_id: AccountId) -> Self {
        let now = Utc::now();
        Self {
            handle,
            account_id,
            full_name: String::new(),
            title: String::new(),
            bio: String::new(),
            skills: Vec::new(),
            social_links: BTreeMap::new(),
            projects: Vec::new(),
            avatar_key: String::new(),
            avatar_url: String::new(),
            resume_key: None,
            resume_url: None,
            email: String::new(),
            phone: String::new(),
            show_email: false,
            show_phone: false,
            show_resume: false,
            favorite_color: String::new(),
            date_of_birth: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the given caller owns this profile
    #[must_use]
    pub fn is_owned_by(&self, account_id: &AccountId) -> bool {
        &self.account_id == account_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_has_empty_defaults() {
        let profile = Profile::new(
            Handle::parse("ada").unwrap(),
            AccountId::new("sub-1"),
        );
        assert_eq!(profile.bio, "");
        assert!(profile.skills.is_empty());
        assert!(profile.social_links.is_empty());
        assert!(!profile.show_email);
        assert!(profile.resume_key.is_none());
    }

    #[test]
    fn test_is_owned_by() {
        let profile = Profile::new(
            Handle::parse("ada").unwrap(),
            AccountId::new("sub-1"),
        );
        assert!(profile.is_owned_by(&AccountId::new("sub-1")));
        assert!(!profile.is_owned_by(&AccountId::new("sub-2")));
    }

    #[test]
    fn test_project_serde_round_trip() {
        let project = Project {
            title: "Folio".to_string(),
            description: "Link-in-bio".to_string(),
            tech_stack: vec!["rust".to_string()],
            image_key: String::new(),
        };
        let json = serde_json::to_value(&project).unwrap();
        // Empty image keys are omitted from the wire format
        assert!(json.get("image_key").is_none());
        let back: Project = serde_json::from_value(json).unwrap();
        assert_eq!(back, project);
    }
}
