//! PostgreSQL pool, embedded migrations and the readiness probe
//!
//! Every pool setting comes from [`DatabaseConfig`], so sizing and timeouts
//! can be tuned per environment through `config/*.toml` or `BM__DATABASE__*`.

use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

const APPLICATION_NAME: &str = "bookmark-backend";

/// Pool options derived from configuration
///
/// The acquire timeout bounds how long a request handler can wait for a
/// connection; past it the store call fails and the request gets an error.
pub fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
}

/// Connect a pool for `config.url`
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&config.url)
        .context("Invalid database URL")?
        .application_name(APPLICATION_NAME);

    let pool = pool_options(config)
        .connect_with(connect_options)
        .await
        .context("Failed to connect to database")?;

    info!(
        max = config.max_connections,
        min = config.min_connections,
        acquire_timeout_secs = config.acquire_timeout_secs,
        "Database pool ready"
    );

    Ok(pool)
}

/// Apply pending migrations from `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    info!("Database migrations applied");
    Ok(())
}

/// `SELECT 1` against the pool, used by `/health/ready`
pub async fn health_check(pool: &PgPool) -> Result<()> {
    if let Err(e) = sqlx::query("SELECT 1").execute(pool).await {
        warn!(error = %e, "Database health check failed");
        return Err(e.into());
    }
    Ok(())
}
