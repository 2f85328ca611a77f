//! Bookmark repository for database operations
//!
//! Every read, update and delete filters on `id` and `user_id` in the same
//! statement, so another user's bookmark is indistinguishable from a
//! missing one.

use anyhow::Result;
use bookmark_shared::types::BookmarkResponse;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Bookmark record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookmarkRecord {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookmarkRecord {
    /// API view of the record, without the owner id
    pub fn into_response(self) -> BookmarkResponse {
        BookmarkResponse {
            id: self.id,
            title: self.title,
            description: self.description,
            link: self.link,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Input for creating a bookmark
#[derive(Debug, Clone)]
pub struct CreateBookmark {
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

/// Input for updating a bookmark; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateBookmark {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Bookmark repository for database operations
pub struct BookmarkRepository;

impl BookmarkRepository {
    /// Insert a bookmark owned by `input.user_id`
    pub async fn create(pool: &PgPool, input: CreateBookmark) -> Result<BookmarkRecord> {
        let record = sqlx::query_as::<_, BookmarkRecord>(
            r#"
            INSERT INTO bookmarks (user_id, title, description, link)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, link, user_id, created_at, updated_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.link)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// All bookmarks owned by a user, oldest first
    pub async fn list_by_owner(pool: &PgPool, user_id: i32) -> Result<Vec<BookmarkRecord>> {
        let records = sqlx::query_as::<_, BookmarkRecord>(
            r#"
            SELECT id, title, description, link, user_id, created_at, updated_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Get bookmark by ID, scoped to its owner
    pub async fn find_owned(
        pool: &PgPool,
        id: i32,
        user_id: i32,
    ) -> Result<Option<BookmarkRecord>> {
        let record = sqlx::query_as::<_, BookmarkRecord>(
            r#"
            SELECT id, title, description, link, user_id, created_at, updated_at
            FROM bookmarks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Partially update a bookmark, scoped to its owner
    pub async fn update_owned(
        pool: &PgPool,
        id: i32,
        user_id: i32,
        updates: UpdateBookmark,
    ) -> Result<Option<BookmarkRecord>> {
        let record = sqlx::query_as::<_, BookmarkRecord>(
            r#"
            UPDATE bookmarks SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                link = COALESCE($5, link),
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, title, description, link, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(updates.title)
        .bind(updates.description)
        .bind(updates.link)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a bookmark, scoped to its owner. Returns the deleted row.
    pub async fn delete_owned(
        pool: &PgPool,
        id: i32,
        user_id: i32,
    ) -> Result<Option<BookmarkRecord>> {
        let record = sqlx::query_as::<_, BookmarkRecord>(
            r#"
            DELETE FROM bookmarks
            WHERE id = $1 AND user_id = $2
            RETURNING id, title, description, link, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
