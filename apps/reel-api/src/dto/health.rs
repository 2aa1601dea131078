//! Health check body

use serde::Serialize;
use utoipa::ToSchema;

/// Response of `GET /health`
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` when the process answers
    #[schema(example = "ok")]
    pub status: String,
    /// Repository backend in use: `memory` or `postgres`
    #[schema(example = "postgres")]
    pub storage: String,
}
