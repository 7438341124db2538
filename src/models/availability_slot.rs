//! # Availability Slot Model
//!
//! A booster's calendar entry. A slot holding a booking reference with status
//! `busy` is a commitment; the release workflow must delete it or the booster
//! appears falsely unavailable forever.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "slot_status", rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    Busy,
    Vacation,
    Sick,
    Blocked,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Busy => write!(f, "busy"),
            Self::Vacation => write!(f, "vacation"),
            Self::Sick => write!(f, "sick"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AvailabilitySlot {
    pub slot_id: Uuid,
    pub booster_id: Uuid,
    pub slot_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: SlotStatus,
    pub booking_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAvailabilitySlot {
    pub booster_id: Uuid,
    pub slot_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: SlotStatus,
    pub booking_id: Option<Uuid>,
}

impl AvailabilitySlot {
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        new_slot: NewAvailabilitySlot,
    ) -> Result<AvailabilitySlot, sqlx::Error> {
        sqlx::query_as::<_, AvailabilitySlot>(
            r#"
            INSERT INTO availability_slots (
                booster_id, slot_date, start_time, end_time, status, booking_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING *
            "#,
        )
        .bind(new_slot.booster_id)
        .bind(new_slot.slot_date)
        .bind(new_slot.start_time)
        .bind(new_slot.end_time)
        .bind(new_slot.status)
        .bind(new_slot.booking_id)
        .fetch_one(executor)
        .await
    }

    /// Find the slot tying a booster to a booking, if any.
    pub async fn find_for_booking<'e>(
        executor: impl PgExecutor<'e>,
        booster_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Option<AvailabilitySlot>, sqlx::Error> {
        sqlx::query_as::<_, AvailabilitySlot>(
            "SELECT * FROM availability_slots WHERE booster_id = $1 AND booking_id = $2",
        )
        .bind(booster_id)
        .bind(booking_id)
        .fetch_optional(executor)
        .await
    }

    /// Delete the slot keyed by (booster, booking). A missing slot is not an
    /// error; it may have been cleaned up by a prior release cycle. Returns
    /// the number of rows deleted.
    pub async fn delete_for_release<'e>(
        executor: impl PgExecutor<'e>,
        booster_id: Uuid,
        booking_id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM availability_slots WHERE booster_id = $1 AND booking_id = $2",
        )
        .bind(booster_id)
        .bind(booking_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}
