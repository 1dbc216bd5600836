//! Authentication extractor
//!
//! Extracts and verifies identity-provider access tokens from the
//! Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use folio_core::AccountId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated caller extracted from the access token
#[derive(Debug, Clone)]
pub struct AuthAccount {
    /// Account id from the token subject
    pub account_id: AccountId,
    /// Verified email from the token claims
    pub email: String,
}

impl AuthAccount {
    /// Create a new AuthAccount
    pub fn new(account_id: AccountId, email: String) -> Self {
        Self { account_id, email }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthAccount
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Verify the token
        let claims = app_state.verifier().verify(bearer.token()).map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthAccount::new(AccountId::new(claims.sub), claims.email))
    }
}

/// Optional authenticated caller
///
/// Returns None if no authorization header is present,
/// or an error if the token is invalid.
#[derive(Debug, Clone)]
pub struct OptionalAuthAccount(pub Option<AuthAccount>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthAccount
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        match auth_result {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);

                let claims = app_state.verifier().verify(bearer.token()).map_err(|e| {
                    tracing::warn!(error = %e, "Invalid access token");
                    ApiError::InvalidAuthFormat
                })?;

                Ok(OptionalAuthAccount(Some(AuthAccount::new(
                    AccountId::new(claims.sub),
                    claims.email,
                ))))
            }
            Err(_) => Ok(OptionalAuthAccount(None)),
        }
    }
}
