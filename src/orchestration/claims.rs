//! # Claim Ledger
//!
//! Creates the bounded first-refusal queue for a released booking: one
//! pending claim per candidate, capped at [`MAX_CLAIM_FANOUT`], each expiring
//! [`CLAIM_TTL_HOURS`] after creation. Acceptance and expiry sweeping live
//! outside this core; the schema carries the contract they must honor.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::constants::{CLAIM_TTL_HOURS, MAX_CLAIM_FANOUT};
use crate::models::{Booster, ClaimRequest};

/// The slice of candidates that actually receives claims.
pub fn claim_window(candidates: &[Booster]) -> &[Booster] {
    &candidates[..candidates.len().min(MAX_CLAIM_FANOUT)]
}

/// Create pending claims for the top candidates. Returns the number of rows
/// actually inserted; re-releases hit the (booking, booster) conflict and
/// count zero for already-invited candidates.
pub async fn create_claims(
    pool: &PgPool,
    booking_id: Uuid,
    candidates: &[Booster],
) -> Result<usize, sqlx::Error> {
    let expires_at = Utc::now() + Duration::hours(CLAIM_TTL_HOURS);
    let mut created = 0usize;

    for candidate in claim_window(candidates) {
        created +=
            ClaimRequest::create(pool, booking_id, candidate.booster_id, expires_at).await? as usize;
    }

    debug!(
        booking_id = %booking_id,
        created,
        candidate_count = candidates.len(),
        "claim invitations written"
    );
    Ok(created)
}
