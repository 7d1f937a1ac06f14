use contracts::domain::product::{Category, Product, ProductDto, ProductsResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&format!("{}/api/products/", api_base()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let body: ProductsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(body.products)
}

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    let response = Request::get(&format!("{}/api/categories/", api_base()))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<Category>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn add_product(dto: &ProductDto) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/products/add", api_base()))
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

pub async fn update_product(id: &str, dto: &ProductDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/products/update/{}", api_base(), id))
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

pub async fn delete_product(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/products/delete/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
