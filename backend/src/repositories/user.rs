//! User repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::fmt;

/// Unique constraint guarding `users.email`
pub const USERS_EMAIL_KEY: &str = "users_email_key";

/// User record from database
#[derive(Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("hashed_password", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Input for updating a user's profile; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user. A taken email fails on `USERS_EMAIL_KEY`.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        name: &str,
        hashed_password: &str,
    ) -> Result<UserRecord> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, name, hashed_password)
            VALUES ($1, $2, $3)
            RETURNING id, email, name, hashed_password, created_at, updated_at
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(hashed_password)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, name, hashed_password, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, name, hashed_password, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Apply a partial update. Returns `None` when no user has this id.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        updates: UpdateUser,
    ) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users SET
                email = COALESCE($2, email),
                name = COALESCE($3, name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, name, hashed_password, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(updates.email)
        .bind(updates.name)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}
