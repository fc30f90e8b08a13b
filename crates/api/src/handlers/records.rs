use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use zonekeeper_domain::{BatchStatus, RecordDraft, RecordFilter, RecordKey, RecordUpdate};

use crate::{
    dto::{
        AddRecordResponse, DeleteRecordsRequest, DeleteRecordsResponse, MessageResponse,
        RecordsQuery, RecordsResponse,
    },
    error::ApiError,
    extract::ApiJson,
    state::AppState,
};

pub async fn list_records(
    State(state): State<AppState>,
    Path(zone): Path<String>,
    Query(query): Query<RecordsQuery>,
) -> Result<Json<RecordsResponse>, ApiError> {
    let filter =
        RecordFilter::from_query(query.record_type.as_deref(), query.search_term.as_deref());
    let records = state.list_records.execute(&zone, &filter).await?;

    Ok(Json(RecordsResponse { records }))
}

pub async fn add_record(
    State(state): State<AppState>,
    Path(zone): Path<String>,
    ApiJson(draft): ApiJson<RecordDraft>,
) -> Result<(StatusCode, Json<AddRecordResponse>), ApiError> {
    let record = state.add_record.execute(&zone, draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddRecordResponse {
            message: "Record added successfully".to_string(),
            record,
        }),
    ))
}

pub async fn update_record(
    State(state): State<AppState>,
    Path(zone): Path<String>,
    ApiJson(update): ApiJson<RecordUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.update_record.execute(&zone, update).await?;

    Ok(Json(MessageResponse {
        message: "Record updated successfully".to_string(),
    }))
}

/// 200 when every record was deleted, 202 with `failed_deletions` otherwise.
pub async fn delete_records(
    State(state): State<AppState>,
    Path(zone): Path<String>,
    ApiJson(req): ApiJson<DeleteRecordsRequest>,
) -> Result<(StatusCode, Json<DeleteRecordsResponse>), ApiError> {
    let keys: Vec<RecordKey> = req.records.into_iter().map(Into::into).collect();
    let report = state.delete_records.execute(&zone, keys).await?;

    let status = match report.status() {
        BatchStatus::Complete => StatusCode::OK,
        BatchStatus::Partial => StatusCode::ACCEPTED,
    };

    Ok((status, Json(DeleteRecordsResponse::from(report))))
}
