//! Password hashing using argon2
//!
//! Argon2 is deliberately slow, so the async variants move the work onto
//! tokio's blocking pool instead of stalling a runtime worker.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tokio::sync::OnceCell;

/// Hash of a throwaway password, computed on first use
static DUMMY_HASH: OnceCell<String> = OnceCell::const_new();

/// Salted Argon2id hashing for stored credentials
pub struct PasswordService;

impl PasswordService {
    /// Hash `password` with a fresh random salt (PHC string format)
    pub fn hash(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
        Ok(hash.to_string())
    }

    /// Check `password` against a stored PHC hash.
    ///
    /// A mismatch is `Ok(false)`; only a malformed hash is an error.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        let parsed =
            PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Run a full verification against a hash no real password matches.
    ///
    /// Lets a lookup miss cost the same Argon2 work as a wrong password.
    pub async fn verify_dummy_async(password: String) -> Result<()> {
        let hash = DUMMY_HASH
            .get_or_try_init(|| Self::hash_async("bookmark-dummy-password".to_string()))
            .await?;
        Self::verify_async(password, hash.clone()).await?;
        Ok(())
    }
}
