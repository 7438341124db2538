//! Health check endpoint for monitoring and load balancing.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::web::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
}

/// GET /health. Always available; does not touch the database.
pub async fn health(_state: State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
