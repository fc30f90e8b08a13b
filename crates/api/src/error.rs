use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;
use zonekeeper_domain::DomainError;

/// Error half of every handler's result; renders as `{"error": "..."}`.
///
/// `ZoneNotFound` and `RecordNotFound` share 404 and differ only in message.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::ZoneNotFound(_)
            | DomainError::RecordNotFound(_)
            | DomainError::DeletionFailed
            | DomainError::UpdateTargetNotFound => StatusCode::NOT_FOUND,
            DomainError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            DomainError::SimulatedFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
