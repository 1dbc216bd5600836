//! Identity directory model mapper

use folio_core::traits::DirectoryIdentity;
use folio_core::value_objects::{AccountId, SignupChannel};

use crate::models::IdentityModel;

/// Wire form of a signup channel in the identities table
pub fn channel_to_str(channel: SignupChannel) -> &'static str {
    match channel {
        SignupChannel::Direct => "direct",
        SignupChannel::Google => "google",
        SignupChannel::LinkedIn => "linked_in",
    }
}

/// Parse a stored channel string; unknown values fall back to direct
pub fn channel_from_str(raw: &str) -> SignupChannel {
    match raw {
        "google" => SignupChannel::Google,
        "linked_in" => SignupChannel::LinkedIn,
        _ => SignupChannel::Direct,
    }
}

/// Convert IdentityModel to DirectoryIdentity
impl From<IdentityModel> for DirectoryIdentity {
    fn from(model: IdentityModel) -> Self {
        DirectoryIdentity {
            identity_id: AccountId::new(model.identity_id),
            email: model.email,
            channel: channel_from_str(&model.channel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_round_trip() {
        for channel in [SignupChannel::Direct, SignupChannel::Google, SignupChannel::LinkedIn] {
            assert_eq!(channel_from_str(channel_to_str(channel)), channel);
        }
    }

    #[test]
    fn test_unknown_channel_defaults_to_direct() {
        assert_eq!(channel_from_str("facebook"), SignupChannel::Direct);
    }
}
