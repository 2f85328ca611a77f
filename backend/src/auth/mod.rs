//! Authentication module
//!
//! JWT access tokens, argon2 password hashing and the `AuthUser` gate.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::AuthUser;
pub use password::PasswordService;
