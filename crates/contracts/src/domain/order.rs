//! Customer orders.

use serde::{Deserialize, Serialize};

/// Statuses an admin can set from the orders screen. The backend stores the
/// status as a plain string, so [`Order::status`] is not an enum.
pub const ORDER_STATUS_OPTIONS: [&str; 4] =
    ["Order Received", "Ready To Ship", "Shipped", "Delivered"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub fname: String,
    #[serde(default)]
    pub lname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub date: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(rename = "totalAmount", default)]
    pub total_amount: f64,
}

impl Order {
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.fname, self.lname).trim().to_string()
    }
}

/// Body of `PUT /api/orders/:id/status`.
#[derive(Debug, Clone, Serialize)]
pub struct OrderStatusDto {
    pub status: String,
}
