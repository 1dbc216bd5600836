//! JWT verification for identity-provider access tokens
//!
//! Tokens are minted by the external identity provider; this service only
//! verifies them and reads the claims it needs.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the identity-provider account id
    pub sub: String,
    /// Verified email of the authenticated account
    #[serde(default)]
    pub email: String,
    /// Display name, when the provider supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Verifies access tokens against the shared signing secret
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    encoding_key: EncodingKey,
}

impl TokenVerifier {
    /// Create a verifier from the shared secret
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Decode and validate an access token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn verify(&self, token: &str) -> Result<AccessClaims, AppError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Sign a token for the given claims. Used by local tooling and tests;
    /// production tokens come from the identity provider.
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, claims: &AccessClaims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> TokenVerifier {
        TokenVerifier::new("test-secret-key-that-is-long-enough")
    }

    fn claims_for(sub: &str) -> AccessClaims {
        let now = Utc::now().timestamp();
        AccessClaims {
            sub: sub.to_string(),
            email: "a@example.com".to_string(),
            name: Some("Ada".to_string()),
            iat: now,
            exp: now + 900,
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let verifier = verifier();
        let token = verifier.issue(&claims_for("sub-1")).unwrap();
        let claims = verifier.verify(&token).unwrap();

        assert_eq!(claims.sub, "sub-1");
        assert_eq!(claims.email, "a@example.com");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let result = verifier().verify("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = verifier().issue(&claims_for("sub-1")).unwrap();
        let other = TokenVerifier::new("a-completely-different-secret");
        assert!(matches!(other.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_verify_rejects_expired() {
        let verifier = verifier();
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: "sub-1".to_string(),
            email: String::new(),
            name: None,
            iat: now - 3600,
            exp: now - 1800,
        };
        let token = verifier.issue(&claims).unwrap();
        assert!(matches!(verifier.verify(&token), Err(AppError::TokenExpired)));
    }
}
