use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state, mounted under `/api`.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/connect", post(handlers::connect))
        .route(
            "/api/records/{zone}",
            get(handlers::list_records)
                .post(handlers::add_record)
                .put(handlers::update_record)
                .delete(handlers::delete_records),
        )
        .route("/api/bulk_update/{zone}", post(handlers::bulk_update))
        .route("/api/audit_logs", get(handlers::get_audit_logs))
        .with_state(state)
}
