//! Admin authentication and registered users.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /api/user/admin`. On failure `success` is false and
/// `message` carries the reason; `token` is only present on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A registered wholesale buyer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "businessName", default)]
    pub business_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact: String,
}

/// Response envelope of `GET /api/user/all`.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<RegisteredUser>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_failure_shape() {
        let res: LoginResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid credentials"}"#)
                .unwrap();
        assert!(!res.success);
        assert!(res.token.is_none());
        assert_eq!(res.message.as_deref(), Some("Invalid credentials"));
    }
}
