use contracts::system::auth::{RegisteredUser, UsersResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch all registered buyers. The endpoint requires the admin token.
pub async fn fetch_users(access_token: &str) -> Result<Vec<RegisteredUser>, String> {
    let response = Request::get(&format!("{}/api/user/all", api_base()))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if text.is_empty() {
            return Err(format!("HTTP {}", status));
        }
        return Err(format!("Error {}: {}", status, text));
    }

    let body: UsersResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(body.users)
}
