//! Product catalog records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Populated by the backend; missing for uncategorized products.
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub quantity: f64,
}

impl Product {
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("Uncategorized")
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.id.as_str())
    }
}

/// Response envelope of `GET /api/products/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Body for creating or updating a product. The backend accepts the category
/// by id and ignores unknown fields.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductDto {
    pub name: String,
    pub description: String,
    /// Category id, not name.
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_tolerates_missing_category() {
        let p: Product =
            serde_json::from_str(r#"{"_id": "p1", "name": "Cloves"}"#).unwrap();
        assert_eq!(p.category_name(), "Uncategorized");
        assert!(p.category_id().is_none());
        assert!(p.images.is_empty());
    }

    #[test]
    fn test_products_envelope() {
        let res: ProductsResponse = serde_json::from_str(
            r#"{"success": true, "products": [{"_id": "p1", "name": "Cloves",
                "category": {"_id": "c1", "name": "Spices"}}]}"#,
        )
        .unwrap();
        assert!(res.success);
        assert_eq!(res.products[0].category_name(), "Spices");
    }
}
