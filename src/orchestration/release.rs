//! # Release Orchestrator
//!
//! The single entry point of the release-and-reassignment workflow.
//!
//! Two stages with different failure semantics:
//!
//! 1. **Atomic stage** (one transaction): load the booking, apply the
//!    optimistic assignment transition, delete the stale calendar slot. Any
//!    failure here is terminal and nothing else runs. After the commit no
//!    concurrent reader can observe a booster reference with an unassigned
//!    status, and the booster's calendar cannot leak a phantom commitment.
//! 2. **Best-effort stage**: match replacements, fan out notifications,
//!    write claim invitations, notify admins, reconcile the job pool. Each
//!    step logs and swallows its own failures; the booking is already
//!    correctly unassigned and a stale projection is recoverable by a later
//!    release or reconciliation pass.

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::constants::notification_kinds;
use crate::error::{ReleaseError, Result};
use crate::models::{AdminRecipient, AvailabilitySlot, Booking, Booster};
use crate::orchestration::{claims, eligibility, fanout, reconciler};

/// Outcome reported to the caller after a successful release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOutcome {
    /// Number of candidate boosters that received a job-available message.
    pub notified_boosters: usize,
    pub message: String,
}

/// Release a booking from its assigned booster and drive reassignment.
pub async fn release_booking(
    pool: &PgPool,
    booking_id: Uuid,
    booster_id: Uuid,
    reason: Option<&str>,
) -> Result<ReleaseOutcome> {
    // Atomic stage: transition the source of truth before anything else.
    let mut tx = pool.begin().await?;

    let booking = Booking::find_by_id(&mut *tx, booking_id)
        .await?
        .ok_or(ReleaseError::BookingNotFound(booking_id))?;

    // Profile absence is tolerated; matching falls back to the booking's
    // own location.
    let releasing_booster = Booster::find_by_id(&mut *tx, booster_id).await?;

    let transitioned = Booking::release_assignment(&mut *tx, booking_id, booster_id).await?;
    if transitioned == 0 {
        return Err(ReleaseError::NotAssignedToBooster {
            booking_id,
            booster_id,
        });
    }

    let slots_removed = AvailabilitySlot::delete_for_release(&mut *tx, booster_id, booking_id).await?;
    tx.commit().await?;

    info!(
        booking_id = %booking_id,
        booster_id = %booster_id,
        slots_removed,
        reason = reason.unwrap_or(""),
        "booking released"
    );

    // Best-effort stage. The booking is unassigned; from here on forward
    // progress beats completeness.
    let hint = eligibility::location_hint(
        releasing_booster
            .as_ref()
            .and_then(|booster| booster.location.as_deref()),
        &booking.location,
    );

    let candidates =
        match eligibility::find_eligible_boosters(pool, booster_id, hint.as_deref()).await {
            Ok(candidates) => candidates,
            Err(error) => {
                warn!(booking_id = %booking_id, error = %error, "eligibility matching failed");
                Vec::new()
            }
        };

    let notified_boosters = fanout::notify_all(
        pool,
        &candidates,
        "New job available",
        &booster_notification_body(&booking),
        notification_kinds::JOB_RELEASED,
    )
    .await;

    if let Err(error) = claims::create_claims(pool, booking_id, &candidates).await {
        warn!(booking_id = %booking_id, error = %error, "claim creation failed");
    }

    notify_admins(pool, &booking, releasing_booster.as_ref(), reason).await;

    if let Err(error) = reconciler::reconcile_job(pool, &booking, reason).await {
        warn!(booking_id = %booking_id, error = %error, "job pool reconciliation failed");
    }

    Ok(ReleaseOutcome {
        notified_boosters,
        message: format!(
            "Booking released. {notified_boosters} boosters notified about the open job."
        ),
    })
}

fn booster_notification_body(booking: &Booking) -> String {
    format!(
        "{} on {} at {} in {}. Price: {:.0} kr.",
        booking.service_name,
        booking.scheduled_date,
        booking.scheduled_time,
        booking.location,
        booking.amount,
    )
}

fn admin_notification_body(
    booking: &Booking,
    releasing_booster: Option<&Booster>,
    reason: Option<&str>,
) -> String {
    let booster_name = releasing_booster
        .map(|booster| booster.display_name.as_str())
        .unwrap_or("An unknown booster");

    match reason {
        Some(reason) => format!(
            "{booster_name} released {} on {}. Reason: {reason}",
            booking.service_name, booking.scheduled_date,
        ),
        None => format!(
            "{booster_name} released {} on {}.",
            booking.service_name, booking.scheduled_date,
        ),
    }
}

async fn notify_admins(
    pool: &PgPool,
    booking: &Booking,
    releasing_booster: Option<&Booster>,
    reason: Option<&str>,
) {
    let admins = match AdminRecipient::list_admins(pool).await {
        Ok(admins) => admins,
        Err(error) => {
            warn!(booking_id = %booking.booking_id, error = %error, "admin lookup failed");
            return;
        }
    };

    fanout::notify_all(
        pool,
        &admins,
        "Booking released",
        &admin_notification_body(booking, releasing_booster, reason),
        notification_kinds::JOB_RELEASED_ADMIN,
    )
    .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn booking() -> Booking {
        Booking {
            booking_id: Uuid::new_v4(),
            service_name: "Bryllupsmakeup".to_string(),
            scheduled_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            scheduled_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            duration_hours: 3.0,
            location: "København, Danmark".to_string(),
            amount: 3000.0,
            status: crate::models::BookingStatus::PendingAssignment,
            assigned_booster_id: None,
            customer_name: Some("Sofie".to_string()),
            customer_email: None,
            customer_phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn booster_body_describes_the_job() {
        let body = booster_notification_body(&booking());
        assert!(body.contains("Bryllupsmakeup"));
        assert!(body.contains("2026-09-12"));
        assert!(body.contains("København"));
        assert!(body.contains("3000 kr."));
    }

    #[test]
    fn admin_body_names_the_booster_and_reason() {
        let booster = Booster {
            booster_id: Uuid::new_v4(),
            display_name: "Mia Jensen".to_string(),
            location: Some("København".to_string()),
            specialties: vec!["makeup".to_string()],
            is_available: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let body = admin_notification_body(&booking(), Some(&booster), Some("sick"));
        assert!(body.contains("Mia Jensen"));
        assert!(body.contains("Reason: sick"));

        let body = admin_notification_body(&booking(), None, None);
        assert!(body.contains("An unknown booster"));
        assert!(!body.contains("Reason"));
    }
}
