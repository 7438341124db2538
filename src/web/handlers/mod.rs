//! HTTP handlers for the release workflow API.

pub mod health;
pub mod release;
