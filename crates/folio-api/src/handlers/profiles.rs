//! Profile handlers
//!
//! Endpoints for profile upsert, public profile reads, and the handle
//! availability check.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use folio_service::dto::{HandleCheckQuery, HandleCheckResponse, ProfileResponse, UpsertProfileRequest};
use folio_service::ProfileService;

use crate::extractors::{AuthAccount, OptionalAuthAccount, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Create or partially update the caller's profile
///
/// POST /profiles
pub async fn upsert_profile(
    State(state): State<AppState>,
    auth: AuthAccount,
    ValidatedJson(request): ValidatedJson<UpsertProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service
        .upsert_profile(&auth.account_id, &auth.email, request)
        .await?;
    Ok(Json(response))
}

/// Get a profile by handle (public, owner view when authenticated)
///
/// GET /profiles/{handle}
pub async fn get_profile(
    State(state): State<AppState>,
    auth: OptionalAuthAccount,
    Path(handle): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let requester = auth.0.as_ref().map(|a| &a.account_id);
    let service = ProfileService::new(state.service_context());
    let response = service.public_profile(&handle, requester).await?;
    Ok(Json(response))
}

/// Check handle availability
///
/// GET /username/check?username={handle}
pub async fn check_username(
    State(state): State<AppState>,
    Query(query): Query<HandleCheckQuery>,
) -> ApiResult<Json<HandleCheckResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.handle_availability(query.username.as_deref()).await?;
    Ok(Json(response))
}
