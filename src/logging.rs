//! # Structured Logging
//!
//! Tracing subscriber initialization for the server binary and tests.
//! Honors `RUST_LOG`; set `BOOSTER_LOG_JSON=1` for JSON output in
//! log-aggregated deployments.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize the global tracing subscriber. Safe to call more than once;
/// subsequent calls are no-ops.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let json_output = std::env::var("BOOSTER_LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        if json_output {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true).with_ansi(false).json())
                .try_init();
        } else {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true))
                .try_init();
        }
    });
}
