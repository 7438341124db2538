//! # API Errors
//!
//! Maps the workflow error taxonomy onto HTTP responses with the
//! `{ "error": message }` body shape the front-end expects. Store failures
//! are logged with detail server-side and collapsed to a generic message on
//! the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::error::ReleaseError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<ReleaseError> for ApiError {
    fn from(error: ReleaseError) -> Self {
        match error {
            ReleaseError::BookingNotFound(_) => Self::not_found("Booking not found"),
            ReleaseError::NotAssignedToBooster { .. } => {
                Self::conflict("Booking is not assigned to this booster")
            }
            ReleaseError::Database(db_error) => {
                error!(error = %db_error, "release failed on a store error");
                Self::internal("Failed to release booking")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn workflow_errors_map_to_expected_statuses() {
        let not_found: ApiError = ReleaseError::BookingNotFound(Uuid::new_v4()).into();
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.message, "Booking not found");

        let conflict: ApiError = ReleaseError::NotAssignedToBooster {
            booking_id: Uuid::new_v4(),
            booster_id: Uuid::new_v4(),
        }
        .into();
        assert_eq!(conflict.status, StatusCode::CONFLICT);

        let internal: ApiError = ReleaseError::Database(sqlx::Error::PoolClosed).into();
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.message, "Failed to release booking");
    }
}
