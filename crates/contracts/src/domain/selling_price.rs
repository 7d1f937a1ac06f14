//! Selling prices and quantity discounts.
//!
//! A [`PriceRecord`] carries one product's base selling price plus an ordered
//! list of discount tiers. The tier list is insertion-ordered and carries no
//! semantic ranking: tiers are not sorted, duplicate or overlapping
//! `minQuantity` values are not rejected, and `discountPercent` is not clamped
//! to `[0,100]`. Edits are purely local until an explicit save; a save sends
//! the whole `basePrice` + `quantityDiscounts` array for the record,
//! replacing server-side state last-write-wins.

use serde::{Deserialize, Serialize};

/// Product the price belongs to, as embedded by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A quantity-discount rule: buy at least `min_quantity`, get
/// `discount_percent` off the base price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountTier {
    #[serde(rename = "minQuantity")]
    pub min_quantity: u32,
    #[serde(rename = "discountPercent")]
    pub discount_percent: f64,
}

impl Default for DiscountTier {
    fn default() -> Self {
        Self {
            min_quantity: 1,
            discount_percent: 0.0,
        }
    }
}

/// One product's selling price record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub product: Option<ProductRef>,
    #[serde(rename = "basePrice", default)]
    pub base_price: f64,
    /// On-hand quantity, informational only. Never edited from this screen.
    #[serde(rename = "totalCurrentQuantity", default)]
    pub total_current_quantity: f64,
    #[serde(rename = "quantityDiscounts", default)]
    pub quantity_discounts: Vec<DiscountTier>,
}

/// Body of `PUT /api/selling-price/:id` — always the full tier array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceUpdate {
    #[serde(rename = "basePrice")]
    pub base_price: f64,
    #[serde(rename = "quantityDiscounts")]
    pub quantity_discounts: Vec<DiscountTier>,
}

impl PriceRecord {
    pub fn product_name(&self) -> &str {
        self.product
            .as_ref()
            .map(|p| p.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unnamed Product")
    }

    /// Set the base price from raw input. Non-numeric input coerces to 0,
    /// negative input coerces to 0, valid non-negative input is kept as-is.
    pub fn set_base_price(&mut self, raw: &str) {
        self.base_price = parse_price(raw);
    }

    /// Append a default tier (`minQuantity: 1`, `discountPercent: 0`).
    pub fn add_tier(&mut self) {
        self.quantity_discounts.push(DiscountTier::default());
    }

    /// Remove the tier at `index`. Out-of-bounds indexes are ignored;
    /// remaining tiers are not re-validated.
    pub fn remove_tier(&mut self, index: usize) {
        if index < self.quantity_discounts.len() {
            self.quantity_discounts.remove(index);
        }
    }

    /// Set a tier's minimum quantity from raw input. Invalid input, zero and
    /// negative values all coerce to 1.
    pub fn set_tier_min_quantity(&mut self, index: usize, raw: &str) {
        if let Some(tier) = self.quantity_discounts.get_mut(index) {
            tier.min_quantity = parse_min_quantity(raw);
        }
    }

    /// Set a tier's discount percentage from raw input. Invalid input coerces
    /// to 0. The value is not clamped to `[0,100]`.
    pub fn set_tier_discount_percent(&mut self, index: usize, raw: &str) {
        if let Some(tier) = self.quantity_discounts.get_mut(index) {
            tier.discount_percent = parse_percent(raw);
        }
    }

    /// Snapshot of the record's editable state, ready to PUT.
    pub fn to_update(&self) -> PriceUpdate {
        PriceUpdate {
            base_price: self.base_price,
            quantity_discounts: self.quantity_discounts.clone(),
        }
    }
}

fn parse_price(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

fn parse_min_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(v) => v.max(1),
        Err(_) => 1,
    }
}

fn parse_percent(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_tiers(tiers: Vec<DiscountTier>) -> PriceRecord {
        PriceRecord {
            id: "p1".into(),
            product: Some(ProductRef {
                id: "prod1".into(),
                name: "Cinnamon".into(),
            }),
            base_price: 100.0,
            total_current_quantity: 40.0,
            quantity_discounts: tiers,
        }
    }

    #[test]
    fn test_base_price_coercion() {
        let mut rec = record_with_tiers(vec![]);
        rec.set_base_price("120.5");
        assert_eq!(rec.base_price, 120.5);
        rec.set_base_price("not a number");
        assert_eq!(rec.base_price, 0.0);
        rec.set_base_price("-3");
        assert_eq!(rec.base_price, 0.0);
        rec.set_base_price("0");
        assert_eq!(rec.base_price, 0.0);
    }

    #[test]
    fn test_add_tier_appends_default() {
        let mut rec = record_with_tiers(vec![DiscountTier {
            min_quantity: 10,
            discount_percent: 5.0,
        }]);
        rec.add_tier();
        assert_eq!(rec.quantity_discounts.len(), 2);
        assert_eq!(rec.quantity_discounts[1], DiscountTier::default());
        // existing tier untouched
        assert_eq!(rec.quantity_discounts[0].min_quantity, 10);
    }

    #[test]
    fn test_remove_tier_by_position() {
        let mut rec = record_with_tiers(vec![
            DiscountTier {
                min_quantity: 10,
                discount_percent: 5.0,
            },
            DiscountTier {
                min_quantity: 50,
                discount_percent: 15.0,
            },
            DiscountTier {
                min_quantity: 100,
                discount_percent: 25.0,
            },
        ]);
        rec.remove_tier(1);
        assert_eq!(rec.quantity_discounts.len(), 2);
        assert_eq!(rec.quantity_discounts[0].min_quantity, 10);
        assert_eq!(rec.quantity_discounts[1].min_quantity, 100);
    }

    #[test]
    fn test_remove_tier_out_of_bounds_is_noop() {
        let mut rec = record_with_tiers(vec![DiscountTier::default()]);
        rec.remove_tier(5);
        assert_eq!(rec.quantity_discounts.len(), 1);
    }

    #[test]
    fn test_min_quantity_coercion() {
        let mut rec = record_with_tiers(vec![DiscountTier::default()]);
        rec.set_tier_min_quantity(0, "25");
        assert_eq!(rec.quantity_discounts[0].min_quantity, 25);
        rec.set_tier_min_quantity(0, "0");
        assert_eq!(rec.quantity_discounts[0].min_quantity, 1);
        rec.set_tier_min_quantity(0, "-4");
        assert_eq!(rec.quantity_discounts[0].min_quantity, 1);
        rec.set_tier_min_quantity(0, "abc");
        assert_eq!(rec.quantity_discounts[0].min_quantity, 1);
    }

    #[test]
    fn test_discount_percent_not_clamped() {
        let mut rec = record_with_tiers(vec![DiscountTier::default()]);
        rec.set_tier_discount_percent(0, "15");
        assert_eq!(rec.quantity_discounts[0].discount_percent, 15.0);
        // out-of-domain values pass through unclamped
        rec.set_tier_discount_percent(0, "150");
        assert_eq!(rec.quantity_discounts[0].discount_percent, 150.0);
        rec.set_tier_discount_percent(0, "junk");
        assert_eq!(rec.quantity_discounts[0].discount_percent, 0.0);
    }

    #[test]
    fn test_tier_edit_only_touches_addressed_tier() {
        let mut rec = record_with_tiers(vec![
            DiscountTier {
                min_quantity: 10,
                discount_percent: 5.0,
            },
            DiscountTier {
                min_quantity: 50,
                discount_percent: 15.0,
            },
        ]);
        rec.set_tier_discount_percent(1, "20");
        assert_eq!(rec.quantity_discounts[0].discount_percent, 5.0);
        assert_eq!(rec.quantity_discounts[1].discount_percent, 20.0);
    }

    #[test]
    fn test_update_payload_wire_shape() {
        let mut rec = record_with_tiers(vec![]);
        rec.set_base_price("120");
        rec.add_tier();
        rec.set_tier_min_quantity(0, "10");
        rec.set_tier_discount_percent(0, "5");
        rec.add_tier();
        rec.set_tier_min_quantity(1, "50");
        rec.set_tier_discount_percent(1, "15");

        let body = serde_json::to_value(rec.to_update()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "basePrice": 120.0,
                "quantityDiscounts": [
                    {"minQuantity": 10, "discountPercent": 5.0},
                    {"minQuantity": 50, "discountPercent": 15.0},
                ],
            })
        );
    }

    #[test]
    fn test_record_deserializes_backend_shape() {
        let rec: PriceRecord = serde_json::from_str(
            r#"{
                "_id": "661f",
                "product": {"_id": "abc", "name": "Black Pepper"},
                "basePrice": 950,
                "totalCurrentQuantity": 120,
                "quantityDiscounts": [{"minQuantity": 25, "discountPercent": 10}]
            }"#,
        )
        .unwrap();
        assert_eq!(rec.id, "661f");
        assert_eq!(rec.product_name(), "Black Pepper");
        assert_eq!(rec.base_price, 950.0);
        assert_eq!(rec.quantity_discounts[0].min_quantity, 25);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        // records freshly initialized by the backend may omit the tier array
        let rec: PriceRecord = serde_json::from_str(r#"{"_id": "x"}"#).unwrap();
        assert!(rec.product.is_none());
        assert_eq!(rec.product_name(), "Unnamed Product");
        assert_eq!(rec.base_price, 0.0);
        assert!(rec.quantity_discounts.is_empty());
    }
}
