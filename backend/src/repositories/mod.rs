//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod bookmark;
pub mod user;

pub use bookmark::{BookmarkRecord, BookmarkRepository, CreateBookmark, UpdateBookmark};
pub use user::{UpdateUser, UserRecord, UserRepository, USERS_EMAIL_KEY};

/// True when `err` is a database rejection on the given unique constraint
pub fn is_unique_violation(err: &anyhow::Error, constraint: &str) -> bool {
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db_err)) => db_err.constraint() == Some(constraint),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        let err = anyhow::anyhow!("connection reset");
        assert!(!is_unique_violation(&err, USERS_EMAIL_KEY));

        let err: anyhow::Error = sqlx::Error::RowNotFound.into();
        assert!(!is_unique_violation(&err, USERS_EMAIL_KEY));
    }
}
