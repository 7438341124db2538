//! # Job Pool Reconciler
//!
//! Keeps the denormalized open-jobs projection consistent with an unassigned
//! booking. The upsert is keyed on the explicit booking reference, so the
//! second of two concurrent releases lands on the conflict path and flips
//! the existing row open instead of inserting a twin.

use sqlx::PgPool;
use tracing::debug;

use crate::constants::JOB_TITLE_PREFIX;
use crate::models::{Booking, Job, NewJob};

/// Title of the job projected from a booking. Together with the date this is
/// the job pool's legacy dedup key, still enforced as a uniqueness constraint.
pub fn job_title(service_name: &str) -> String {
    format!("{JOB_TITLE_PREFIX}{service_name}")
}

/// Whole-unit hourly rate. A non-positive duration falls back to the full
/// amount rather than dividing by zero.
pub fn hourly_rate(amount: f64, duration_hours: f64) -> f64 {
    if duration_hours > 0.0 {
        (amount / duration_hours).round()
    } else {
        amount.round()
    }
}

fn job_description(reason: Option<&str>) -> String {
    match reason {
        Some(reason) => format!("Booking released, reassignment needed. Reason: {reason}"),
        None => "Booking released, reassignment needed.".to_string(),
    }
}

/// Upsert the job projection for a released booking: insert it `open`, or
/// flip an existing row back to `open` and clear its assignment.
pub async fn reconcile_job(
    pool: &PgPool,
    booking: &Booking,
    reason: Option<&str>,
) -> Result<Job, sqlx::Error> {
    let new_job = NewJob {
        booking_id: booking.booking_id,
        title: job_title(&booking.service_name),
        service_type: booking.service_name.clone(),
        location: booking.location.clone(),
        date_needed: booking.scheduled_date,
        time_needed: booking.scheduled_time,
        rate: hourly_rate(booking.amount, booking.duration_hours),
        boosters_needed: 1,
        description: Some(job_description(reason)),
        customer_name: booking.customer_name.clone(),
        customer_email: booking.customer_email.clone(),
        customer_phone: booking.customer_phone.clone(),
    };

    let job = Job::upsert_open(pool, new_job).await?;
    debug!(
        booking_id = %booking.booking_id,
        job_id = %job.job_id,
        status = %job.status,
        "job pool reconciled"
    );
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_uses_the_booking_prefix() {
        assert_eq!(job_title("Bryllupsmakeup"), "Booking: Bryllupsmakeup");
    }

    #[test]
    fn rate_is_amount_over_hours_rounded() {
        assert_eq!(hourly_rate(3000.0, 3.0), 1000.0);
        assert_eq!(hourly_rate(2999.0, 3.0), 1000.0);
        assert_eq!(hourly_rate(500.0, 1.5), 333.0);
    }

    #[test]
    fn rate_survives_degenerate_durations() {
        assert_eq!(hourly_rate(1200.0, 0.0), 1200.0);
        assert_eq!(hourly_rate(1200.4, -2.0), 1200.0);
    }

    #[test]
    fn description_records_the_reason() {
        assert!(job_description(Some("double booked")).contains("double booked"));
        assert!(!job_description(None).contains("Reason"));
    }
}
