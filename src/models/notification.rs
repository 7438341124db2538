//! # Notification Model
//!
//! Write-once, fire-and-forget message to any notifiable recipient. Not a
//! source of truth; duplicate or dropped sends are tolerated by design of
//! the workflow, so there is no delivery state here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Notification {
    pub notification_id: Uuid,
    pub recipient_id: Uuid,
    pub title: String,
    pub body: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        recipient_id: Uuid,
        title: &str,
        body: &str,
        kind: &str,
    ) -> Result<Notification, sqlx::Error> {
        sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (recipient_id, title, body, kind, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING *
            "#,
        )
        .bind(recipient_id)
        .bind(title)
        .bind(body)
        .bind(kind)
        .fetch_one(executor)
        .await
    }

    /// All notifications of a given kind for a recipient, newest first.
    pub async fn list_for_recipient<'e>(
        executor: impl PgExecutor<'e>,
        recipient_id: Uuid,
        kind: &str,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE recipient_id = $1 AND kind = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(recipient_id)
        .bind(kind)
        .fetch_all(executor)
        .await
    }
}
