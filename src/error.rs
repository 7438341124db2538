//! # Error Taxonomy
//!
//! Errors for the release workflow. Only two conditions are terminal for a
//! caller: the booking does not exist, or the optimistic assignment guard
//! rejects the transition. Store failures during the atomic stage surface as
//! [`ReleaseError::Database`]; failures in the best-effort fan-out stage are
//! logged and swallowed by the orchestrator and never reach this type.

use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    #[error("Booking not found: {0}")]
    BookingNotFound(Uuid),

    #[error("Booking {booking_id} is not assigned to booster {booster_id}")]
    NotAssignedToBooster { booking_id: Uuid, booster_id: Uuid },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, ReleaseError>;
