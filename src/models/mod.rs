//! # Data Layer
//!
//! One module per entity in the system of record. Structs map to tables via
//! sqlx `FromRow`; status columns are Postgres enum types mirrored by Rust
//! enums. Query methods take `impl PgExecutor` so they run equally against
//! the pool or inside a transaction.

pub mod availability_slot;
pub mod booking;
pub mod booster;
pub mod claim_request;
pub mod job;
pub mod notification;
pub mod role;

pub use availability_slot::{AvailabilitySlot, NewAvailabilitySlot, SlotStatus};
pub use booking::{Booking, BookingStatus, NewBooking};
pub use booster::{Booster, NewBooster};
pub use claim_request::{ClaimRequest, ClaimStatus};
pub use job::{Job, JobStatus, NewJob};
pub use notification::Notification;
pub use role::AdminRecipient;
