use contracts::domain::selling_price::{PriceRecord, PriceUpdate};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_base;

/// Pull the backend's error message out of a failed response. Falls back to
/// the HTTP status when the body carries no `error`/`message` field.
async fn error_message(response: Response) -> String {
    let status = response.status();

    #[derive(serde::Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        message: Option<String>,
    }

    if let Ok(body) = response.json::<ErrorBody>().await {
        if let Some(msg) = body.error.or(body.message) {
            return msg;
        }
    }
    format!("HTTP {}", status)
}

/// Fetch all price records. Replaces the whole local list on success.
pub async fn fetch_prices() -> Result<Vec<PriceRecord>, String> {
    let response = Request::get(&format!("{}/api/selling-price/", api_base()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<Vec<PriceRecord>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Ask the backend to create default price records for any product that has
/// none yet.
pub async fn initialize_prices() -> Result<(), String> {
    let response = Request::post(&format!("{}/api/selling-price/initialize", api_base()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// Push one record's edited state: the base price plus the entire discount
/// array, replacing the server's copy last-write-wins.
pub async fn update_price(id: &str, update: &PriceUpdate) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/selling-price/{}", api_base(), id))
        .json(update)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}
