use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    dto::{BulkUpdateRequest, BulkUpdateResponse},
    error::ApiError,
    extract::ApiJson,
    state::AppState,
};

/// Always 200 for a valid request; per-change failures travel in
/// `failed_changes`.
pub async fn bulk_update(
    State(state): State<AppState>,
    Path(zone): Path<String>,
    ApiJson(req): ApiJson<BulkUpdateRequest>,
) -> Result<Json<BulkUpdateResponse>, ApiError> {
    let report = state.bulk_update.execute(&zone, req.changes).await?;

    Ok(Json(BulkUpdateResponse::from(report)))
}
