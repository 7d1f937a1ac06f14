use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Login with admin email and password. Returns the session token.
pub async fn admin_login(email: String, password: String) -> Result<String, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&format!("{}/api/user/admin", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    let body: LoginResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if body.success {
        body.token
            .ok_or_else(|| "Login succeeded but no token was returned".to_string())
    } else {
        Err(body
            .message
            .unwrap_or_else(|| "Invalid email or password".to_string()))
    }
}
