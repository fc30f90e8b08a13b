use axum::{extract::State, Json};

use crate::{dto::AuditLogsResponse, state::AppState};

pub async fn get_audit_logs(State(state): State<AppState>) -> Json<AuditLogsResponse> {
    let entries = state.get_audit_logs.execute().await;
    Json(AuditLogsResponse::from(entries))
}
