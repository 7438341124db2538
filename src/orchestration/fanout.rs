//! # Notification Fan-out
//!
//! Best-effort broadcast: one insert per recipient, dispatched concurrently,
//! no retry, no transactional grouping. A failed insert is logged and
//! skipped; the workflow never fails because a notification did not land.

use futures::future;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::models::{AdminRecipient, Booster, Notification};

/// Anything that can receive a notification. Boosters and administrators are
/// both valid targets; neither needs to know about the other's identity
/// model.
pub trait Notifiable {
    fn recipient_id(&self) -> Uuid;
}

impl Notifiable for Booster {
    fn recipient_id(&self) -> Uuid {
        self.booster_id
    }
}

impl Notifiable for AdminRecipient {
    fn recipient_id(&self) -> Uuid {
        self.user_id
    }
}

/// Write one notification per recipient, concurrently. Returns how many
/// inserts succeeded.
pub async fn notify_all<R: Notifiable>(
    pool: &PgPool,
    recipients: &[R],
    title: &str,
    body: &str,
    kind: &str,
) -> usize {
    let sends = recipients.iter().map(|recipient| {
        let recipient_id = recipient.recipient_id();
        async move {
            Notification::create(pool, recipient_id, title, body, kind)
                .await
                .map_err(|error| (recipient_id, error))
        }
    });

    let mut delivered = 0usize;
    for result in future::join_all(sends).await {
        match result {
            Ok(_) => delivered += 1,
            Err((recipient_id, error)) => {
                warn!(
                    recipient_id = %recipient_id,
                    kind = kind,
                    error = %error,
                    "notification insert failed, skipping recipient"
                );
            }
        }
    }

    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn boosters_and_admins_expose_recipient_ids() {
        let booster_id = Uuid::new_v4();
        let booster = Booster {
            booster_id,
            display_name: "Mia".to_string(),
            location: None,
            specialties: vec![],
            is_available: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(booster.recipient_id(), booster_id);

        let user_id = Uuid::new_v4();
        let admin = AdminRecipient { user_id };
        assert_eq!(admin.recipient_id(), user_id);
    }
}
