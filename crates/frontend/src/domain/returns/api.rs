use contracts::domain::returns::{
    RefundUpdateDto, ReturnRequest, ReturnStatus, ReturnStatusDto,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn fetch_returns() -> Result<Vec<ReturnRequest>, String> {
    let response = Request::get(&format!("{}/api/refunds/returns", api_base()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<ReturnRequest>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_return(id: &str) -> Result<ReturnRequest, String> {
    let response = Request::get(&format!("{}/api/refunds/returns/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<ReturnRequest>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Set the return's status. Any status can be written over any other; the
/// backend returns the updated record.
pub async fn update_return_status(
    id: &str,
    status: ReturnStatus,
) -> Result<ReturnRequest, String> {
    let response = Request::put(&format!(
        "{}/api/refunds/returns/{}/status",
        api_base(),
        id
    ))
    .json(&ReturnStatusDto { status })
    .map_err(|e| format!("Failed to serialize request: {}", e))?
    .send()
    .await
    .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<ReturnRequest>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update_refund(refund_id: &str, dto: &RefundUpdateDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/refunds/refunds/{}", api_base(), refund_id))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
