//! Purchase requests and supplier deliveries.

use serde::{Deserialize, Serialize};

use super::selling_price::ProductRef;

/// The backend embeds the full product for listing but accepts a bare id on
/// submit, so the field deserializes from either shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductField {
    Ref(ProductRef),
    Id(String),
}

impl ProductField {
    pub fn id(&self) -> &str {
        match self {
            ProductField::Ref(r) => &r.id,
            ProductField::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ProductField::Ref(r) if !r.name.is_empty() => Some(&r.name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestedItem {
    pub product: ProductField,
    #[serde(rename = "requestedQuantity")]
    pub requested_quantity: u32,
    #[serde(default)]
    pub notes: String,
    /// YYYY-MM-DD from the date input; empty when not set.
    #[serde(default)]
    pub deadline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub products: Vec<RequestedItem>,
    #[serde(rename = "requestDate")]
    pub request_date: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub status: String,
}

impl PurchaseRequest {
    /// Short product summary for the requests table: first name plus a count
    /// of the rest.
    pub fn products_summary(&self) -> String {
        let names: Vec<&str> = self
            .products
            .iter()
            .map(|item| item.product.name().unwrap_or("Unknown Product"))
            .collect();
        match names.as_slice() {
            [] => "No products".to_string(),
            [only] => (*only).to_string(),
            [first, rest @ ..] => format!("{} + {} more", first, rest.len()),
        }
    }
}

/// Body of `POST /api/purchases/request`.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseRequestDto {
    pub products: Vec<RequestedItemDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestedItemDto {
    pub product: String,
    #[serde(rename = "requestedQuantity")]
    pub requested_quantity: u32,
    pub notes: String,
    pub deadline: String,
}

/// Response envelope of `GET /api/purchases/requests`.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRequestsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub requests: Vec<PurchaseRequest>,
}

/// One received line in a delivery. Quantity and unit price must be positive
/// for the entry to be submitted.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptEntry {
    pub product: String,
    #[serde(rename = "quantityReceived")]
    pub quantity_received: f64,
    #[serde(rename = "pricePerUnit")]
    pub price_per_unit: f64,
    #[serde(rename = "supplierName")]
    pub supplier_name: String,
    #[serde(rename = "purchaseRequest")]
    pub purchase_request: String,
    pub notes: String,
}

impl ReceiptEntry {
    pub fn is_valid(&self) -> bool {
        !self.product.is_empty() && self.quantity_received > 0.0 && self.price_per_unit > 0.0
    }
}

/// Body of `POST /api/purchases/receive`.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiveDeliveryDto {
    pub entries: Vec<ReceiptEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_field_both_shapes() {
        let embedded: ProductField =
            serde_json::from_str(r#"{"_id": "p1", "name": "Cardamom"}"#).unwrap();
        assert_eq!(embedded.id(), "p1");
        assert_eq!(embedded.name(), Some("Cardamom"));

        let bare: ProductField = serde_json::from_str(r#""p2""#).unwrap();
        assert_eq!(bare.id(), "p2");
        assert_eq!(bare.name(), None);
    }

    #[test]
    fn test_products_summary() {
        let req: PurchaseRequest = serde_json::from_str(
            r#"{
                "_id": "r1",
                "requestDate": "2025-05-02T09:30:00Z",
                "status": "Pending",
                "products": [
                    {"product": {"_id": "p1", "name": "Cardamom"}, "requestedQuantity": 5},
                    {"product": "p2", "requestedQuantity": 2},
                    {"product": "p3", "requestedQuantity": 1}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(req.products_summary(), "Cardamom + 2 more");
    }

    #[test]
    fn test_receipt_entry_validity() {
        let mut entry = ReceiptEntry {
            product: "p1".into(),
            quantity_received: 10.0,
            price_per_unit: 250.0,
            supplier_name: "Lanka Spice Co".into(),
            purchase_request: "r1".into(),
            notes: String::new(),
        };
        assert!(entry.is_valid());
        entry.quantity_received = 0.0;
        assert!(!entry.is_valid());
    }
}
