//! Route definitions for the bookmark API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod bookmarks;
mod health;
mod users;


pub use auth::auth_routes;
pub use bookmarks::bookmark_routes;
pub use users::user_routes;

/// Create the main application router with all middleware
///
/// API routes are mounted under `server.base_path`; health probes stay at
/// the root.
pub fn create_router(state: AppState) -> Router {
    let base_path = format!("/{}", state.config().server.base_path.trim_matches('/'));

    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check));

    // axum refuses to nest at the root
    let router = if base_path == "/" {
        router.merge(api_routes())
    } else {
        router.nest(&base_path, api_routes())
    };

    router
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::auth_routes())
        .nest("/users", users::user_routes())
        .nest("/bookmarks", bookmarks::bookmark_routes())
}
