//! Authentication routes
//!
//! Public endpoints for signup and login.

use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use bookmark_shared::types::{AccessToken, LoginRequest, SignupRequest, UserResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// POST /auth/signup
async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = AuthService::signup(state.db(), &req.email, &req.name, &req.password).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /auth/login
async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AccessToken>> {
    let token = AuthService::login(state.db(), state.jwt(), &req.email, &req.password).await?;
    Ok(Json(token))
}
