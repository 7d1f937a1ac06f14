use contracts::domain::supplier::{Supplier, SupplierDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, String> {
    let response = Request::get(&format!("{}/api/suppliers", api_base()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<Supplier>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn add_supplier(dto: &SupplierDto) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/suppliers/add", api_base()))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        // surface the backend's reason (duplicate email, validation error)
        let status = response.status();

        #[derive(serde::Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            error: Option<String>,
        }
        if let Ok(body) = response.json::<ErrorBody>().await {
            if let Some(msg) = body.error {
                return Err(msg);
            }
        }
        return Err(format!("HTTP {}", status));
    }
    Ok(())
}

pub async fn update_supplier(id: &str, dto: &SupplierDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/suppliers/{}", api_base(), id))
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

pub async fn delete_supplier(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/suppliers/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
