//! Server binary: settings, logging, pool, migrations, then the axum router.

use anyhow::Context;

use booster_core::config::Settings;
use booster_core::database::{establish_pool, run_migrations};
use booster_core::logging::init_logging;
use booster_core::web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let settings = Settings::load().context("failed to load settings")?;
    let pool = establish_pool(&settings)
        .await
        .context("failed to connect to the database")?;
    run_migrations(&pool)
        .await
        .context("failed to run database migrations")?;

    let app = booster_core::web::build_router(AppState::new(pool));
    let listener = tokio::net::TcpListener::bind(&settings.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_address))?;

    tracing::info!(address = %settings.bind_address, "booster-core web API listening");
    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
