//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Auth Types
// ============================================================================

/// Signup request
///
/// The raw password travels in `hashedPassword` for compatibility with
/// existing clients; `password` is accepted as well.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "email must be an email"))]
    pub email: String,
    #[validate(length(min = 1, message = "name should not be empty"))]
    pub name: String,
    #[serde(rename = "hashedPassword", alias = "password")]
    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be an email"))]
    pub email: String,
    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,
}

/// Issued bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}

// ============================================================================
// User Types
// ============================================================================

/// Partial update of the current user; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EditUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// User as exposed over the API. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub bookmarks: Vec<BookmarkResponse>,
}

// ============================================================================
// Bookmark Types
// ============================================================================

/// Create bookmark request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookmarkRequest {
    #[validate(length(min = 1, message = "title should not be empty"))]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "link should not be empty"))]
    pub link: String,
}

/// Partial bookmark update
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EditBookmarkRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "title should not be empty"))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "link should not be empty"))]
    pub link: Option<String>,
}

/// Bookmark as exposed over the API (owner id omitted)
///
/// Multi-word fields are camelCase on the wire, like `hashedPassword`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_signup_reads_hashed_password_field() {
        let req: SignupRequest = serde_json::from_value(json!({
            "email": "a@x.com",
            "name": "A",
            "hashedPassword": "pw"
        }))
        .unwrap();
        assert_eq!(req.password, "pw");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_signup_accepts_password_alias() {
        let req: SignupRequest = serde_json::from_value(json!({
            "email": "a@x.com",
            "name": "A",
            "password": "pw"
        }))
        .unwrap();
        assert_eq!(req.password, "pw");
    }

    #[test]
    fn test_signup_ignores_unknown_fields() {
        let req: SignupRequest = serde_json::from_value(json!({
            "email": "a@x.com",
            "name": "A",
            "hashedPassword": "pw",
            "id": 99
        }))
        .unwrap();
        assert_eq!(req.email, "a@x.com");
    }

    #[rstest]
    #[case("not-an-email", "A", "pw")]
    #[case("a@x.com", "", "pw")]
    #[case("a@x.com", "A", "")]
    fn test_signup_rejects_invalid_input(
        #[case] email: &str,
        #[case] name: &str,
        #[case] password: &str,
    ) {
        let req = SignupRequest {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_edit_user_validates_only_supplied_email() {
        assert!(EditUserRequest::default().validate().is_ok());

        let bad = EditUserRequest {
            email: Some("nope".to_string()),
            name: None,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_edit_bookmark_rejects_empty_title() {
        let req = EditBookmarkRequest {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_user_response_has_no_password_field() {
        let user = UserResponse {
            id: 1,
            email: "a@x.com".to_string(),
            name: "A".to_string(),
            bookmarks: Vec::new(),
        };
        let value = serde_json::to_value(&user).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();

        assert_eq!(keys.len(), 4);
        assert!(value.get("hashedPassword").is_none());
        assert!(value.get("hashed_password").is_none());
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_bookmark_response_omits_owner() {
        let bookmark = BookmarkResponse {
            id: 7,
            title: "Rust".to_string(),
            description: None,
            link: "https://www.rust-lang.org".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&bookmark).unwrap();
        assert!(value.get("user_id").is_none());
        assert!(value.get("userId").is_none());
        assert!(value["description"].is_null());
    }

    #[test]
    fn test_bookmark_timestamps_are_camel_case() {
        let bookmark = BookmarkResponse {
            id: 1,
            title: "Docs".to_string(),
            description: Some("std".to_string()),
            link: "https://doc.rust-lang.org".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&bookmark).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
