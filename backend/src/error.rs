//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting domain and internal errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Login failure. Deliberately identical for unknown email and wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Signup with an email that is already registered
    #[error("Credentials taken")]
    CredentialsTaken,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// HTTP status and machine-readable code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::InvalidCredentials => (StatusCode::FORBIDDEN, "INVALID_CREDENTIALS"),
            ApiError::CredentialsTaken => (StatusCode::FORBIDDEN, "CREDENTIALS_TAKEN"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            ApiError::Validation(msg) | ApiError::Unauthorized(msg) | ApiError::NotFound(msg) => {
                msg.clone()
            }
            ApiError::InvalidCredentials | ApiError::CredentialsTaken => self.to_string(),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                // Outermost context only; the source chain may hold SQL or driver details
                err.to_string()
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use rstest::rstest;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[case(ApiError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
    #[case(ApiError::Unauthorized("Invalid token".to_string()), StatusCode::UNAUTHORIZED)]
    #[case(ApiError::InvalidCredentials, StatusCode::FORBIDDEN)]
    #[case(ApiError::CredentialsTaken, StatusCode::FORBIDDEN)]
    #[case(ApiError::NotFound("Bookmark not found".to_string()), StatusCode::NOT_FOUND)]
    #[case(ApiError::Internal(anyhow::anyhow!("boom")), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_error_status(#[case] error: ApiError, #[case] expected: StatusCode) {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }

    #[tokio::test]
    async fn test_forbidden_errors_have_distinct_codes() {
        let invalid = body_json(ApiError::InvalidCredentials.into_response()).await;
        let taken = body_json(ApiError::CredentialsTaken.into_response()).await;

        assert_eq!(invalid["error"]["code"], "INVALID_CREDENTIALS");
        assert_eq!(taken["error"]["code"], "CREDENTIALS_TAKEN");
    }

    #[tokio::test]
    async fn test_internal_error_hides_source_chain() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!(
            "duplicate key value violates unique constraint \"users_email_key\""
        ));
        let error = ApiError::Internal(result.context("Unable to edit user with ID 5").unwrap_err());

        let body = body_json(error.into_response()).await;

        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "Unable to edit user with ID 5");
    }
}
