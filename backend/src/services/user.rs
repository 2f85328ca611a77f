//! Profile operations for the authenticated user

use crate::error::ApiError;
use crate::repositories::{BookmarkRepository, UpdateUser, UserRecord, UserRepository};
use anyhow::Context;
use bookmark_shared::types::{EditUserRequest, UserResponse};
use sqlx::PgPool;

/// User profile service
pub struct UserService;

impl UserService {
    /// Profile of the token's user
    ///
    /// A token can outlive its user row; that case is treated as an
    /// authentication failure rather than a missing resource.
    pub async fn get_current_user(pool: &PgPool, user_id: i32) -> Result<UserResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .with_context(|| format!("Unable to load user with ID {}", user_id))?
            .ok_or_else(|| ApiError::Unauthorized("User no longer exists".to_string()))?;

        Self::with_bookmarks(pool, user).await
    }

    /// Update email and/or name; absent fields are left unchanged
    pub async fn edit_current_user(
        pool: &PgPool,
        user_id: i32,
        req: EditUserRequest,
    ) -> Result<UserResponse, ApiError> {
        let updates = UpdateUser {
            email: req.email,
            name: req.name,
        };

        let user = UserRepository::update(pool, user_id, updates)
            .await
            .with_context(|| format!("Unable to edit user with ID {}", user_id))?
            .ok_or_else(|| ApiError::NotFound(format!("User with ID {} not found.", user_id)))?;

        Self::with_bookmarks(pool, user).await
    }

    async fn with_bookmarks(pool: &PgPool, user: UserRecord) -> Result<UserResponse, ApiError> {
        let bookmarks = BookmarkRepository::list_by_owner(pool, user.id)
            .await
            .with_context(|| format!("Unable to load bookmarks of user with ID {}", user.id))?;

        Ok(UserResponse {
            id: user.id,
            email: user.email,
            name: user.name,
            bookmarks: bookmarks.into_iter().map(|b| b.into_response()).collect(),
        })
    }
}
