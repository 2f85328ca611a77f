//! Application state management
//!
//! Shared state handed to every request handler through Axum's state
//! extraction. Built once at startup and read-only afterwards.

use crate::auth::JwtService;
use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// All fields are cheap to clone: `PgPool` is internally reference counted,
/// the config sits behind an `Arc` and the JWT keys are `Arc`'d.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token issuer built from `config.jwt`
    pub jwt: JwtService,
}

impl AppState {
    /// Create the application state, deriving JWT keys from the configured secret
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.expiration_secs);

        Self {
            db,
            config: Arc::new(config),
            jwt,
        }
    }

    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
