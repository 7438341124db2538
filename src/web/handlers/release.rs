//! # Release Handler
//!
//! POST /v1/bookings/release. Identifiers arrive as optional fields so the
//! handler can return the exact 400 body the front-end matches on, instead
//! of axum's default extractor rejection.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::orchestration;
use crate::web::errors::{ApiError, ApiResult};
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRequest {
    pub booking_id: Option<Uuid>,
    pub booster_id: Option<Uuid>,
    pub reason: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseResponse {
    pub success: bool,
    pub notified_boosters: usize,
    pub message: String,
}

pub async fn release_booking(
    State(state): State<AppState>,
    Json(request): Json<ReleaseRequest>,
) -> ApiResult<Json<ReleaseResponse>> {
    let (Some(booking_id), Some(booster_id)) = (request.booking_id, request.booster_id) else {
        return Err(ApiError::bad_request("Missing bookingId or boosterId"));
    };

    info!(
        booking_id = %booking_id,
        booster_id = %booster_id,
        "release requested"
    );

    let outcome = orchestration::release_booking(
        &state.pool,
        booking_id,
        booster_id,
        request.reason.as_deref(),
    )
    .await?;

    Ok(Json(ReleaseResponse {
        success: true,
        notified_boosters: outcome.notified_boosters,
        message: outcome.message,
    }))
}
