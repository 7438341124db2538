//! # Booking Model
//!
//! A confirmed customer appointment, the source of truth for the release
//! workflow. The assignment invariant is enforced both here and by a CHECK
//! constraint: `assigned_booster_id` is non-null exactly when the status is
//! `assigned`.
//!
//! The release transition uses an optimistic conditional update so that a
//! booster cannot release a booking they are not currently assigned to, and
//! a second concurrent release is rejected instead of silently re-processed.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use std::fmt;
use uuid::Uuid;

/// Assignment lifecycle of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
pub enum BookingStatus {
    /// Unassigned and waiting for a booster to claim it
    PendingAssignment,
    /// A booster is committed to the appointment
    Assigned,
    /// The appointment took place
    Completed,
    /// The appointment was cancelled
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PendingAssignment => write!(f, "pending_assignment"),
            Self::Assigned => write!(f, "assigned"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_assignment" => Ok(Self::PendingAssignment),
            "assigned" => Ok(Self::Assigned),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid booking status: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub booking_id: Uuid,
    pub service_name: String,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_hours: f64,
    pub location: String,
    pub amount: f64,
    pub status: BookingStatus,
    pub assigned_booster_id: Option<Uuid>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New booking for creation (without generated fields). Used by the upstream
/// booking flow and by test fixtures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub service_name: String,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub duration_hours: f64,
    pub location: String,
    pub amount: f64,
    pub status: BookingStatus,
    pub assigned_booster_id: Option<Uuid>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}

impl Booking {
    /// Create a new booking
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        new_booking: NewBooking,
    ) -> Result<Booking, sqlx::Error> {
        sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                service_name, scheduled_date, scheduled_time, duration_hours,
                location, amount, status, assigned_booster_id,
                customer_name, customer_email, customer_phone, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(&new_booking.service_name)
        .bind(new_booking.scheduled_date)
        .bind(new_booking.scheduled_time)
        .bind(new_booking.duration_hours)
        .bind(&new_booking.location)
        .bind(new_booking.amount)
        .bind(new_booking.status)
        .bind(new_booking.assigned_booster_id)
        .bind(&new_booking.customer_name)
        .bind(&new_booking.customer_email)
        .bind(&new_booking.customer_phone)
        .fetch_one(executor)
        .await
    }

    /// Find a booking by ID
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: Uuid,
    ) -> Result<Option<Booking>, sqlx::Error> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE booking_id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Conditionally clear the assignment: only succeeds while the booking is
    /// still `assigned` to the given booster. Returns the number of rows
    /// updated (0 means the optimistic guard rejected the transition).
    pub async fn release_assignment<'e>(
        executor: impl PgExecutor<'e>,
        booking_id: Uuid,
        booster_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE bookings
            SET assigned_booster_id = NULL,
                status = $3,
                updated_at = NOW()
            WHERE booking_id = $1
              AND assigned_booster_id = $2
              AND status = $4
            "#,
        )
        .bind(booking_id)
        .bind(booster_id)
        .bind(BookingStatus::PendingAssignment)
        .bind(BookingStatus::Assigned)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            BookingStatus::PendingAssignment,
            BookingStatus::Assigned,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::from_str(&status.to_string()), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(BookingStatus::from_str("on_hold").is_err());
    }
}
