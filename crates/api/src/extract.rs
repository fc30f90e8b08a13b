use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::error::ApiError;

/// `Json` body extractor whose rejections render as `{"error": "..."}` with 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(zonekeeper_domain::DomainError::Validation(
            rejection.body_text(),
        ))
    }
}
