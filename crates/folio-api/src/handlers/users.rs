//! User handlers
//!
//! Endpoints for the caller's account snapshot.

use axum::{extract::State, Json};
use folio_service::dto::AccountResponse;
use folio_service::ProfileService;

use crate::extractors::AuthAccount;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the current account
///
/// GET /users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthAccount,
) -> ApiResult<Json<AccountResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.current_account(&auth.account_id).await?;
    Ok(Json(response))
}
