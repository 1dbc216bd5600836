//! Link handlers
//!
//! Endpoints for link create-or-update and deletion.

use axum::extract::{Path, State};
use axum::Json;
use folio_service::dto::{LinkResponse, UpsertLinkRequest};
use folio_service::LinkService;

use crate::extractors::{AuthAccount, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Create or update a link owned by the caller
///
/// POST /links
pub async fn upsert_link(
    State(state): State<AppState>,
    auth: AuthAccount,
    ValidatedJson(request): ValidatedJson<UpsertLinkRequest>,
) -> ApiResult<Json<LinkResponse>> {
    let service = LinkService::new(state.service_context());
    let response = service.upsert_link(&auth.account_id, request).await?;
    Ok(Json(response))
}

/// Soft-delete a link owned by the caller
///
/// DELETE /links/{link_id}
pub async fn delete_link(
    State(state): State<AppState>,
    auth: AuthAccount,
    Path(link_id): Path<String>,
) -> ApiResult<NoContent> {
    let service = LinkService::new(state.service_context());
    service.delete_link(&auth.account_id, &link_id).await?;
    Ok(NoContent)
}
