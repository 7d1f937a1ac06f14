use contracts::domain::purchase::{
    PurchaseRequest, PurchaseRequestDto, PurchaseRequestsResponse, ReceiveDeliveryDto,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn submit_request(dto: &PurchaseRequestDto) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/purchases/request", api_base()))
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

/// Purchase requests that still await delivery.
pub async fn fetch_pending_requests() -> Result<Vec<PurchaseRequest>, String> {
    let response = Request::get(&format!(
        "{}/api/purchases/requests?status=Pending",
        api_base()
    ))
    .send()
    .await
    .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let body: PurchaseRequestsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(body.requests)
}

pub async fn submit_receipts(dto: &ReceiveDeliveryDto) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/purchases/receive", api_base()))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
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
    Ok(())
}
