//! # Booster Model
//!
//! A service professional. Read-only from the release workflow's perspective;
//! the matcher consumes the availability flag and the free-text location.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Booster {
    pub booster_id: Uuid,
    pub display_name: String,
    pub location: Option<String>,
    pub specialties: Vec<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New booster for creation (without generated fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooster {
    pub display_name: String,
    pub location: Option<String>,
    pub specialties: Vec<String>,
    pub is_available: bool,
}

impl Booster {
    /// Create a new booster
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        new_booster: NewBooster,
    ) -> Result<Booster, sqlx::Error> {
        sqlx::query_as::<_, Booster>(
            r#"
            INSERT INTO boosters (display_name, location, specialties, is_available, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(&new_booster.display_name)
        .bind(&new_booster.location)
        .bind(&new_booster.specialties)
        .bind(new_booster.is_available)
        .fetch_one(executor)
        .await
    }

    /// Find a booster by ID
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: Uuid,
    ) -> Result<Option<Booster>, sqlx::Error> {
        sqlx::query_as::<_, Booster>("SELECT * FROM boosters WHERE booster_id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// All available boosters except the excluded one, in natural store order.
    /// Location filtering happens in the matcher, not here, because the
    /// substring semantics are easier to test as a pure function.
    pub async fn list_available_excluding<'e>(
        executor: impl PgExecutor<'e>,
        exclude_booster_id: Uuid,
    ) -> Result<Vec<Booster>, sqlx::Error> {
        sqlx::query_as::<_, Booster>(
            r#"
            SELECT * FROM boosters
            WHERE is_available = TRUE
              AND booster_id <> $1
            "#,
        )
        .bind(exclude_booster_id)
        .fetch_all(executor)
        .await
    }
}
