//! # Job Model
//!
//! Denormalized "open work" projection consumed by the job-board listing,
//! kept separate from bookings for legacy reasons. The reconciler upserts on
//! the explicit `booking_id` key; the `(title, date_needed)` uniqueness
//! constraint backstops the legacy dedup key against concurrent writers.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "job_status", rename_all = "snake_case")]
pub enum JobStatus {
    Open,
    Assigned,
    InProgress,
    Completed,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Assigned => write!(f, "assigned"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub job_id: Uuid,
    pub booking_id: Option<Uuid>,
    pub title: String,
    pub service_type: String,
    pub location: String,
    pub date_needed: NaiveDate,
    pub time_needed: NaiveTime,
    pub rate: f64,
    pub boosters_needed: i32,
    pub status: JobStatus,
    pub assigned_booster_id: Option<Uuid>,
    pub description: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New job projection for the reconciler's insert path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJob {
    pub booking_id: Uuid,
    pub title: String,
    pub service_type: String,
    pub location: String,
    pub date_needed: NaiveDate,
    pub time_needed: NaiveTime,
    pub rate: f64,
    pub boosters_needed: i32,
    pub description: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
}

impl Job {
    /// Upsert the job projection for a booking and force it open. The insert
    /// and the flip-back-to-open paths are one statement so concurrent
    /// releases cannot observe a window between lookup and write.
    pub async fn upsert_open<'e>(
        executor: impl PgExecutor<'e>,
        new_job: NewJob,
    ) -> Result<Job, sqlx::Error> {
        sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (
                booking_id, title, service_type, location, date_needed, time_needed,
                rate, boosters_needed, status, description,
                customer_name, customer_email, customer_phone, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NOW(), NOW())
            ON CONFLICT (booking_id) DO UPDATE
            SET status = $9,
                assigned_booster_id = NULL,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(new_job.booking_id)
        .bind(&new_job.title)
        .bind(&new_job.service_type)
        .bind(&new_job.location)
        .bind(new_job.date_needed)
        .bind(new_job.time_needed)
        .bind(new_job.rate)
        .bind(new_job.boosters_needed)
        .bind(JobStatus::Open)
        .bind(&new_job.description)
        .bind(&new_job.customer_name)
        .bind(&new_job.customer_email)
        .bind(&new_job.customer_phone)
        .fetch_one(executor)
        .await
    }

    /// Find the job projected from a booking, if any.
    pub async fn find_by_booking_id<'e>(
        executor: impl PgExecutor<'e>,
        booking_id: Uuid,
    ) -> Result<Option<Job>, sqlx::Error> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE booking_id = $1")
            .bind(booking_id)
            .fetch_optional(executor)
            .await
    }
}
