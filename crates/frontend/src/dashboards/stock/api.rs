use contracts::analytics::{StockDashboardResponse, StockItem};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn fetch_stock() -> Result<Vec<StockItem>, String> {
    let response = Request::get(&format!("{}/api/dashboard/stock", api_base()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let body: StockDashboardResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if !body.success {
        return Err("Failed to fetch stock data.".to_string());
    }
    Ok(body.data)
}
