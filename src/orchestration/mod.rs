//! # Release Orchestration
//!
//! The release workflow and its collaborators:
//!
//! - [`release`] - the orchestrator: atomic transition, then best-effort fan-out
//! - [`eligibility`] - availability and location matching for replacements
//! - [`claims`] - bounded, time-boxed first-refusal invitations
//! - [`fanout`] - best-effort notification broadcast
//! - [`reconciler`] - keeps the open-jobs projection in sync with the booking

pub mod claims;
pub mod eligibility;
pub mod fanout;
pub mod reconciler;
pub mod release;

pub use release::{release_booking, ReleaseOutcome};
