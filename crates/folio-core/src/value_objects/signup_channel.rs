//! Signup channel - which path an identity arrived through

use serde::{Deserialize, Serialize};

/// The sign-up path an identity event arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignupChannel {
    /// Direct email/password registration
    #[default]
    Direct,
    /// Google OAuth sign-in
    Google,
    /// LinkedIn OAuth sign-in
    LinkedIn,
}

impl SignupChannel {
    /// Whether this channel is an external identity provider
    #[must_use]
    pub fn is_social(&self) -> bool {
        !matches!(self, Self::Direct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_social() {
        assert!(!SignupChannel::Direct.is_social());
        assert!(SignupChannel::Google.is_social());
        assert!(SignupChannel::LinkedIn.is_social());
    }
}
