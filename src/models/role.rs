//! # Role Directory
//!
//! Read-only view of the role-assignment directory. Administrators are
//! notification recipients in their own right; they do not need to own a
//! booster profile to be reachable.

use sqlx::{FromRow, PgExecutor};
use uuid::Uuid;

use crate::constants::roles;

/// An administrator resolved from the role directory.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AdminRecipient {
    pub user_id: Uuid,
}

impl AdminRecipient {
    /// All users holding the admin role.
    pub async fn list_admins<'e>(
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<AdminRecipient>, sqlx::Error> {
        sqlx::query_as::<_, AdminRecipient>("SELECT user_id FROM user_roles WHERE role = $1")
            .bind(roles::ADMIN)
            .fetch_all(executor)
            .await
    }
}
