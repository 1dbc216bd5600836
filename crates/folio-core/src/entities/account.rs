//! Account entity - canonical record for one human

use chrono::{DateTime, Utc};

use crate::value_objects::{AccountId, Handle};

/// Canonical account attributes, keyed by the externally issued account id.
///
/// Exactly one account exists per human; a second sign-up channel for the
/// same email links into the original account instead of creating a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub full_name: String,
    /// Chosen handle; absent until profile completion for social signups
    pub handle: Option<Handle>,
    pub date_of_birth: Option<String>,
    pub profile_complete: bool,
    /// Externally issued identity ids representing the same human.
    /// Grows only by union, never shrinks.
    pub linked_identity_ids: Vec<String>,
    pub picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account for a first confirmation
    pub fn new(id: AccountId, email: impl Into<String>, full_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into(),
            full_name: full_name.into(),
            handle: None,
            date_of_birth: None,
            profile_complete: false,
            linked_identity_ids: Vec::new(),
            picture_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record an identity id as belonging to this account (set union)
    pub fn link_identity(&mut self, identity_id: &str) {
        if !self
            .linked_identity_ids
            .iter()
            .any(|id| id == identity_id)
        {
            self.linked_identity_ids.push(identity_id.to_string());
        }
    }

    /// Replace the full name only when the candidate carries more
    /// information than the stored value ("prefer richer data")
    pub fn merge_full_name(&mut self, candidate: &str) {
        if candidate.len() > self.full_name.len() {
            self.full_name = candidate.to_string();
        }
    }

    /// Whether the account has a user-chosen (not auto-generated) handle
    #[must_use]
    pub fn has_chosen_handle(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_generated())
    }

    /// Stamp the update time
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(AccountId::new("sub-1"), "a@example.com", "Ada")
    }

    #[test]
    fn test_link_identity_is_set_union() {
        let mut acct = account();
        acct.link_identity("sub-1");
        acct.link_identity("sub-2");
        acct.link_identity("sub-1");
        assert_eq!(acct.linked_identity_ids, vec!["sub-1", "sub-2"]);
    }

    #[test]
    fn test_merge_full_name_prefers_richer() {
        let mut acct = account();
        acct.merge_full_name("Ada Lovelace");
        assert_eq!(acct.full_name, "Ada Lovelace");
        acct.merge_full_name("Ada");
        assert_eq!(acct.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_has_chosen_handle() {
        let mut acct = account();
        assert!(!acct.has_chosen_handle());
        acct.handle = Some(Handle::fallback(&acct.id.clone()));
        assert!(!acct.has_chosen_handle());
        acct.handle = Some(Handle::parse("ada").unwrap());
        assert!(acct.has_chosen_handle());
    }
}
