//! Request gate for protected routes
//!
//! `AuthUser` is an extractor: listing it in a handler's arguments makes
//! the route require a valid `Authorization: Bearer <token>` header. It runs
//! before body extraction, so unauthenticated requests never reach
//! validation or the service layer.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Identity resolved from a validated access token
///
/// Only the user id crosses into the services; every lookup and ownership
/// check is keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        let claims = app_state
            .jwt()
            .validate_token(token)
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| ApiError::Unauthorized("Invalid user ID in token".to_string()))?;

        Ok(AuthUser { user_id })
    }
}
