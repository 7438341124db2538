//! # Workflow Constants
//!
//! Operational boundaries of the release and reassignment workflow.

/// Maximum number of claim invitations created per release. Bounds
/// notification noise when many boosters match a popular location.
pub const MAX_CLAIM_FANOUT: usize = 5;

/// How long a claim invitation stays open before the (out-of-process)
/// sweeper may flip it to `expired`.
pub const CLAIM_TTL_HOURS: i64 = 24;

/// Title prefix for jobs projected from released bookings. Together with the
/// date this forms the job pool's legacy dedup key.
pub const JOB_TITLE_PREFIX: &str = "Booking: ";

/// Notification type tags consumed by the read surface.
pub mod notification_kinds {
    pub const JOB_RELEASED: &str = "job_released";
    pub const JOB_RELEASED_ADMIN: &str = "job_released_admin";
}

/// Role names in the role-assignment directory.
pub mod roles {
    pub const ADMIN: &str = "admin";
}
