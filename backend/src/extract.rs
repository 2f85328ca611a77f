//! Request body and path extractors
//!
//! Input is validated here, before handlers run, and every rejection is an
//! `ApiError::Validation` (400) with the structured error body.

use crate::error::ApiError;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has been deserialized and passed its `validator` rules.
///
/// Unknown fields are dropped during deserialization.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        Ok(ValidatedJson(value))
    }
}

/// Parse a positive integer resource id from a path segment
pub fn parse_id(s: &str) -> Result<i32, ApiError> {
    s.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Validation(format!("Invalid id: {}", s)))
}
