use contracts::analytics::FinancialSummary;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn fetch_summary() -> Result<FinancialSummary, String> {
    let response = Request::get(&format!("{}/api/analytics/summary", api_base()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<FinancialSummary>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
