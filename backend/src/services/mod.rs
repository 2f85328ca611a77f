//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the HTTP layer and the repositories.

pub mod auth;
pub mod bookmark;
pub mod user;

pub use auth::AuthService;
pub use bookmark::BookmarkService;
pub use user::UserService;
