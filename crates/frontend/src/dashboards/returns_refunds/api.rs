use contracts::analytics::ReturnsRefundsStats;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn fetch_dashboard() -> Result<ReturnsRefundsStats, String> {
    let response = Request::get(&format!("{}/api/refunds/dashboard", api_base()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let status = response.status();

        #[derive(serde::Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            message: Option<String>,
        }
        if let Ok(body) = response.json::<ErrorBody>().await {
            if let Some(msg) = body.message {
                return Err(msg);
            }
        }
        return Err(format!("HTTP {}", status));
    }

    response
        .json::<ReturnsRefundsStats>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
