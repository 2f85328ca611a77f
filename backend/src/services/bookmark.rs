//! Ownership-scoped bookmark CRUD
//!
//! Each operation is one repository call filtered by both the bookmark id
//! and the caller's user id.

use crate::error::ApiError;
use crate::repositories::{BookmarkRepository, CreateBookmark, UpdateBookmark};
use anyhow::Context;
use bookmark_shared::types::{BookmarkResponse, CreateBookmarkRequest, EditBookmarkRequest};
use sqlx::PgPool;
use tracing::info;

fn bookmark_not_found() -> ApiError {
    ApiError::NotFound("Bookmark not found".to_string())
}

/// Bookmark service
pub struct BookmarkService;

impl BookmarkService {
    /// All bookmarks of `user_id`
    ///
    /// An owner without bookmarks gets `NotFound`, not an empty list.
    pub async fn get_bookmarks(
        pool: &PgPool,
        user_id: i32,
    ) -> Result<Vec<BookmarkResponse>, ApiError> {
        let records = BookmarkRepository::list_by_owner(pool, user_id)
            .await
            .context("Failed to load bookmarks")?;

        if records.is_empty() {
            return Err(ApiError::NotFound("Bookmarks not found".to_string()));
        }

        Ok(records.into_iter().map(|r| r.into_response()).collect())
    }

    pub async fn get_bookmark_by_id(
        pool: &PgPool,
        user_id: i32,
        bookmark_id: i32,
    ) -> Result<BookmarkResponse, ApiError> {
        let record = BookmarkRepository::find_owned(pool, bookmark_id, user_id)
            .await
            .context("Failed to load bookmark")?
            .ok_or_else(bookmark_not_found)?;

        Ok(record.into_response())
    }

    pub async fn create_bookmark(
        pool: &PgPool,
        user_id: i32,
        req: CreateBookmarkRequest,
    ) -> Result<BookmarkResponse, ApiError> {
        let input = CreateBookmark {
            user_id,
            title: req.title,
            description: req.description,
            link: req.link,
        };

        let record = BookmarkRepository::create(pool, input)
            .await
            .context("Failed to create bookmark")?;

        info!(user_id, bookmark_id = record.id, "Bookmark created");
        Ok(record.into_response())
    }

    pub async fn edit_bookmark_by_id(
        pool: &PgPool,
        user_id: i32,
        bookmark_id: i32,
        req: EditBookmarkRequest,
    ) -> Result<BookmarkResponse, ApiError> {
        let updates = UpdateBookmark {
            title: req.title,
            description: req.description,
            link: req.link,
        };

        let record = BookmarkRepository::update_owned(pool, bookmark_id, user_id, updates)
            .await
            .context("Failed to edit bookmark")?
            .ok_or_else(bookmark_not_found)?;

        Ok(record.into_response())
    }

    /// Delete and return the bookmark as it was before deletion
    pub async fn delete_bookmark_by_id(
        pool: &PgPool,
        user_id: i32,
        bookmark_id: i32,
    ) -> Result<BookmarkResponse, ApiError> {
        let record = BookmarkRepository::delete_owned(pool, bookmark_id, user_id)
            .await
            .context("Failed to delete bookmark")?
            .ok_or_else(bookmark_not_found)?;

        info!(user_id, bookmark_id, "Bookmark deleted");
        Ok(record.into_response())
    }
}
