//! Signup and login
//!
//! Password hashing and verification run on the blocking thread pool; the
//! JWT service is passed in by reference with its keys already derived.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{is_unique_violation, UserRepository, USERS_EMAIL_KEY};
use anyhow::{anyhow, Context};
use bookmark_shared::types::{AccessToken, UserResponse};
use sqlx::PgPool;
use tracing::{info, warn};

/// Authentication operations
pub struct AuthService;

impl AuthService {
    /// Register a new user
    ///
    /// Email uniqueness is left to the `users_email_key` constraint, so two
    /// concurrent signups for one address cannot both succeed.
    pub async fn signup(
        pool: &PgPool,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<UserResponse, ApiError> {
        let hashed_password = PasswordService::hash_async(password.to_string())
            .await
            .context("Failed to create user")?;

        let user = match UserRepository::create(pool, email, name, &hashed_password).await {
            Ok(user) => user,
            Err(e) if is_unique_violation(&e, USERS_EMAIL_KEY) => {
                return Err(ApiError::CredentialsTaken)
            }
            Err(e) => return Err(ApiError::Internal(e.context("Failed to create user"))),
        };

        info!(user_id = user.id, "User signed up");

        Ok(UserResponse {
            id: user.id,
            email: user.email,
            name: user.name,
            bookmarks: Vec::new(),
        })
    }

    /// Exchange email and password for an access token
    ///
    /// Every failure, including store errors, surfaces as
    /// `InvalidCredentials` so callers cannot tell which step failed. An
    /// unknown email still pays for one Argon2 verification.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<AccessToken, ApiError> {
        Self::try_login(pool, jwt_service, email, password)
            .await
            .map_err(|e| {
                warn!(reason = %e, "Login rejected");
                ApiError::InvalidCredentials
            })
    }

    async fn try_login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> anyhow::Result<AccessToken> {
        let Some(user) = UserRepository::find_by_email(pool, email).await? else {
            PasswordService::verify_dummy_async(password.to_string()).await?;
            return Err(anyhow!("unknown email"));
        };

        let valid =
            PasswordService::verify_async(password.to_string(), user.hashed_password).await?;
        if !valid {
            return Err(anyhow!("password mismatch for user {}", user.id));
        }

        let access_token = jwt_service.sign_token(user.id, &user.email)?;
        info!(
            user_id = user.id,
            expires_in_secs = jwt_service.expiration_secs(),
            "User logged in"
        );

        Ok(AccessToken { access_token })
    }
}
