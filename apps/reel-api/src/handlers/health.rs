//! Liveness endpoint

use axum::{extract::State, Json};

use crate::{dto::health::HealthResponse, AppState};

/// Report liveness and the storage backend in use
///
/// Does not touch the repository, so a slow database never fails the check.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        storage: state.storage.to_string(),
    })
}
