//! Link entity - an ordered, soft-deletable link list entry

use chrono::{DateTime, Utc};

use crate::value_objects::AccountId;

/// A single entry in an account's link list, keyed by (account, link id).
///
/// Deletion is a flag flip: soft-deleted links are excluded from every read
/// projection but retained in storage, and re-saving the same id revives
/// the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub account_id: AccountId,
    pub link_id: String,
    pub title: String,
    pub url: String,
    /// Sort position; ties keep insertion order
    pub position: i32,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Create a new active link
    pub fn new(
        account_id: AccountId,
        link_id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        position: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            account_id,
            link_id: link_id.into(),
            title: title.into(),
            url: url.into(),
            position,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flag the link as deleted
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_link_is_active() {
        let link = Link::new(AccountId::new("sub-1"), "l1", "Blog", "https://example.com", 0);
        assert!(!link.is_deleted);
    }

    #[test]
    fn test_soft_delete_sets_flag_only() {
        let mut link = Link::new(AccountId::new("sub-1"), "l1", "Blog", "https://example.com", 0);
        link.soft_delete();
        assert!(link.is_deleted);
        assert_eq!(link.title, "Blog");
        assert_eq!(link.url, "https://example.com");
    }
}
