//! Handle value object - the public profile slug

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AccountId;

/// Minimum handle length
pub const MIN_LEN: usize = 3;
/// Maximum handle length
pub const MAX_LEN: usize = 20;

/// Errors from parsing a handle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleParseError {
    #[error("Handle must not be empty")]
    Empty,

    #[error("Handle must be {MIN_LEN}-{MAX_LEN} characters")]
    BadLength,

    #[error("Handle may only contain lowercase letters, numbers, underscores, and hyphens")]
    BadCharset,
}

/// User-chosen unique identifier for a profile, used as its URL segment.
///
/// Valid handles match `[a-z0-9_-]{3,20}`. Derived forms (provisional
/// handles and collision-disambiguated handles) are constructed through
/// [`Handle::provisional`] and [`Handle::disambiguate`] and may exceed the
/// length cap, mirroring how the stores treat them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    /// Parse and normalize a user-submitted handle.
    ///
    /// Input is trimmed and lowercased before validation, matching the
    /// availability-check endpoint.
    pub fn parse(raw: &str) -> Result<Self, HandleParseError> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(HandleParseError::Empty);
        }
        if normalized.len() < MIN_LEN || normalized.len() > MAX_LEN {
            return Err(HandleParseError::BadLength);
        }
        if !normalized.chars().all(is_handle_char) {
            return Err(HandleParseError::BadCharset);
        }
        Ok(Self(normalized))
    }

    /// Whether a raw string is a valid handle
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_ok()
    }

    /// Wrap an already-stored handle without validation.
    ///
    /// Stored handles include generated and disambiguated forms that do not
    /// satisfy [`Handle::parse`], so loading must not re-validate.
    #[must_use]
    pub fn new_unchecked(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Derive a provisional handle for a social signup that carried no
    /// user-chosen handle.
    ///
    /// The email local part is sanitized to the handle charset and truncated;
    /// if the result is too short the `user_<id>` fallback is used instead.
    #[must_use]
    pub fn provisional(email: &str, identity_id: &AccountId) -> Self {
        let local = email.split('@').next().unwrap_or_default();
        let mut sanitized: String = local
            .to_lowercase()
            .chars()
            .filter(|c| is_handle_char(*c))
            .collect();
        sanitized.truncate(MAX_LEN);

        if sanitized.len() < MIN_LEN {
            return Self::fallback(identity_id);
        }
        Self(sanitized)
    }

    /// The `user_<id>` fallback handle for an identity
    #[must_use]
    pub fn fallback(identity_id: &AccountId) -> Self {
        let suffix: String = identity_id
            .short()
            .to_lowercase()
            .chars()
            .filter(|c| is_handle_char(*c))
            .collect();
        Self(format!("user_{suffix}"))
    }

    /// Append the identity suffix to resolve a collision with another
    /// account's handle. The result deliberately skips the length cap, as
    /// the source system does for disambiguated handles.
    #[must_use]
    pub fn disambiguate(&self, account_id: &AccountId) -> Self {
        Self(format!("{}_{}", self.0, account_id.short()))
    }

    /// Whether this handle was auto-generated rather than user-chosen
    #[must_use]
    pub fn is_generated(&self) -> bool {
        self.0.starts_with("user_")
    }

    /// Get the handle as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_handle_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
