//! Current-user profile routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::extract::ValidatedJson;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use bookmark_shared::types::{EditUserRequest, UserResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/", patch(edit_me))
}

/// GET /users/me
async fn get_me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserResponse>> {
    let user = UserService::get_current_user(state.db(), auth.user_id).await?;
    Ok(Json(user))
}

/// PATCH /users
async fn edit_me(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<EditUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::edit_current_user(state.db(), auth.user_id, req).await?;
    Ok(Json(user))
}
