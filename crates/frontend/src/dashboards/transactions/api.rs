use contracts::analytics::{Paged, PurchaseRecord, SaleRecord};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn fetch_sales(page: u32) -> Result<Paged<SaleRecord>, String> {
    let response = Request::get(&format!("{}/api/analytics/sales?page={}", api_base(), page))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Paged<SaleRecord>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_purchases(page: u32) -> Result<Paged<PurchaseRecord>, String> {
    let response = Request::get(&format!(
        "{}/api/analytics/purchases?page={}",
        api_base(),
        page
    ))
    .send()
    .await
    .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Paged<PurchaseRecord>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
