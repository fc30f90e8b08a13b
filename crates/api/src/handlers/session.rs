use axum::{extract::State, Json};
use tracing::debug;
use zonekeeper_domain::Credentials;

use crate::{
    dto::{ConnectRequest, ConnectResponse},
    error::ApiError,
    extract::ApiJson,
    state::AppState,
};

pub async fn connect(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ConnectRequest>,
) -> Result<Json<ConnectResponse>, ApiError> {
    let credentials = Credentials::from(req);
    let zones = state.connect.execute(&credentials).await?;

    debug!(zones = zones.len(), "Connect succeeded");
    Ok(Json(ConnectResponse { zones }))
}
