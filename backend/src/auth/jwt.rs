//! Access token issuing and validation
//!
//! Tokens are HS256 JWTs binding a user id and email. Signing keys are
//! derived once from the configured secret and shared through `AppState`.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signing and verification keys built from the shared secret
#[derive(Clone)]
struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// Token issuer
///
/// Construct once at startup from `JwtConfig` and keep in `AppState`;
/// cloning only bumps reference counts.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiration_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiration_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            expiration_secs,
        }
    }

    /// Sign a time-limited token for `user_id` / `email`
    pub fn sign_token(&self, user_id: i32, email: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expiration_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to sign access token: {}", e))
    }

    /// Validate signature and expiry, returning the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }

    #[inline]
    pub fn expiration_secs(&self) -> i64 {
        self.expiration_secs
    }
}
