//! # Database Operations
//!
//! Connection pool setup, health checking, and embedded migrations.

pub mod connection;

pub use connection::{establish_pool, health_check, run_migrations};
