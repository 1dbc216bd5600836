//! Identity webhook handlers
//!
//! Endpoints called by the identity provider during signup: the pre-signup
//! duplicate gate and the post-confirmation reconciliation hook.

use axum::{extract::State, Json};
use folio_service::dto::{PostConfirmationRequest, PreSignupRequest};
use folio_service::SignupService;
use serde::Serialize;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Webhook acknowledgement body
#[derive(Debug, Serialize)]
pub struct AcknowledgeResponse {
    pub status: &'static str,
}

impl AcknowledgeResponse {
    fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Pre-signup duplicate gate
///
/// POST /identity/pre-signup
///
/// Rejects with 409 when the email already belongs to an account and with
/// 400 for unverified social emails; otherwise acknowledges the signup.
pub async fn pre_signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PreSignupRequest>,
) -> ApiResult<Json<AcknowledgeResponse>> {
    let service = SignupService::new(state.service_context());
    service.reject_if_duplicate(&request).await?;
    Ok(Json(AcknowledgeResponse::ok()))
}

/// Post-confirmation reconciliation hook
///
/// POST /identity/post-confirmation
///
/// Always acknowledges; reconciliation failures are logged, never returned,
/// so the provider cannot roll back a confirmed signup on our account.
pub async fn post_confirmation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PostConfirmationRequest>,
) -> Json<AcknowledgeResponse> {
    let service = SignupService::new(state.service_context());
    service.on_identity_confirmed(request).await;
    Json(AcknowledgeResponse::ok())
}
