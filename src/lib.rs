#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Booster Core
//!
//! Rust core for the booking release and reassignment workflow of the Booster
//! marketplace.
//!
//! ## Overview
//!
//! When an assigned booster (service provider) can no longer fulfill a booked
//! job, this crate atomically unassigns the booking, finds eligible
//! replacement boosters, fans out time-boxed claim invitations, notifies
//! administrators, and keeps the denormalized "open jobs" pool consistent
//! with the booking's unassigned state.
//!
//! The workflow runs as a stateless, synchronously-invoked request handler.
//! The authoritative state change (the booking transition plus the stale
//! calendar slot cleanup) happens in a single transaction guarded by an
//! optimistic conditional update; everything after the commit is a
//! best-effort fan-out stage that favors forward progress over side-effect
//! completeness.
//!
//! ## Module Organization
//!
//! - [`models`] - Data layer: bookings, jobs, boosters, slots, claims, notifications
//! - [`orchestration`] - The release workflow and its collaborators
//! - [`database`] - Connection pool setup and embedded migrations
//! - [`web`] - Axum HTTP surface consumed by trusted front-end clients
//! - [`config`] - Layered settings (file + environment)
//! - [`error`] - Workflow error taxonomy
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use booster_core::orchestration::release_booking;
//! use sqlx::PgPool;
//! use uuid::Uuid;
//!
//! # async fn example(pool: &PgPool, booking_id: Uuid, booster_id: Uuid) -> anyhow::Result<()> {
//! let outcome = release_booking(pool, booking_id, booster_id, Some("double booked")).await?;
//! println!("{} boosters notified", outcome.notified_boosters);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod orchestration;
pub mod web;

pub use config::Settings;
pub use error::{ReleaseError, Result};
