use contracts::domain::order::{Order, OrderStatusDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    let response = Request::get(&format!("{}/api/orders", api_base()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<Order>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update_status(id: &str, status: &str) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/orders/{}/status", api_base(), id))
        .json(&OrderStatusDto {
            status: status.to_string(),
        })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
