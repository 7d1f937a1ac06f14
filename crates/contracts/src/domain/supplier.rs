//! Supplier directory records.

use serde::{Deserialize, Serialize};

/// Fixed category list offered by the supplier form.
pub const SUPPLIER_CATEGORIES: [&str; 8] = [
    "Electronics",
    "Spices",
    "Clothing",
    "Food & Beverages",
    "Office Supplies",
    "Raw Materials",
    "Machinery",
    "Other",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
}

/// Body for `POST /api/suppliers/add` and `PUT /api/suppliers/:id`.
#[derive(Debug, Clone, Serialize)]
pub struct SupplierDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub notes: String,
}

impl Default for SupplierDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            category: "Other".to_string(),
            notes: String::new(),
        }
    }
}

impl SupplierDto {
    /// Name, email and phone are required by the form.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }
}

impl From<&Supplier> for SupplierDto {
    fn from(s: &Supplier) -> Self {
        Self {
            name: s.name.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            category: s.category.clone(),
            notes: s.notes.clone(),
        }
    }
}
