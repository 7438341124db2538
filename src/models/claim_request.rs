//! # Claim Request Model
//!
//! A time-boxed invitation giving one candidate booster first refusal on a
//! released booking. The store enforces two invariants any future acceptance
//! endpoint inherits: one claim per (booking, booster) pair, and at most one
//! `accepted` claim per booking (partial unique index).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "claim_status", rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Waiting for the candidate to respond
    Pending,
    /// The candidate took the job; siblings must be withdrawn
    Accepted,
    /// The invitation lapsed unanswered
    Expired,
    /// Superseded by a sibling's acceptance
    Withdrawn,
}

impl ClaimStatus {
    /// Terminal statuses never transition again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Expired | Self::Withdrawn)
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::Expired => write!(f, "expired"),
            Self::Withdrawn => write!(f, "withdrawn"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ClaimRequest {
    pub claim_id: Uuid,
    pub booking_id: Uuid,
    pub booster_id: Uuid,
    pub status: ClaimStatus,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ClaimRequest {
    /// Insert a pending claim. Conflicting with an existing claim for the
    /// same (booking, booster) pair is a no-op, which keeps re-releases from
    /// duplicating invitations. Returns 1 if a row was created, 0 otherwise.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        booking_id: Uuid,
        booster_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO claim_requests (booking_id, booster_id, status, expires_at, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (booking_id, booster_id) DO NOTHING
            "#,
        )
        .bind(booking_id)
        .bind(booster_id)
        .bind(ClaimStatus::Pending)
        .bind(expires_at)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// All claims for a booking, oldest first.
    pub async fn list_for_booking<'e>(
        executor: impl PgExecutor<'e>,
        booking_id: Uuid,
    ) -> Result<Vec<ClaimRequest>, sqlx::Error> {
        sqlx::query_as::<_, ClaimRequest>(
            "SELECT * FROM claim_requests WHERE booking_id = $1 ORDER BY created_at ASC",
        )
        .bind(booking_id)
        .fetch_all(executor)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!ClaimStatus::Pending.is_terminal());
        assert!(ClaimStatus::Accepted.is_terminal());
        assert!(ClaimStatus::Expired.is_terminal());
        assert!(ClaimStatus::Withdrawn.is_terminal());
    }
}
