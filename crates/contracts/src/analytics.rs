//! Analytics and dashboard response shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::stock::StockStatus;

/// One product row of `GET /api/dashboard/stock`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(rename = "totalValue", default)]
    pub total_value: f64,
}

impl StockItem {
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.quantity)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockDashboardResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<StockItem>,
}

/// Sales/purchases/profit for one aggregation window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodSummary {
    #[serde(default)]
    pub sales: f64,
    #[serde(default)]
    pub purchases: f64,
    #[serde(default)]
    pub profit: f64,
}

/// Response of `GET /api/analytics/summary`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    #[serde(default)]
    pub daily: PeriodSummary,
    #[serde(default)]
    pub monthly: PeriodSummary,
    #[serde(default)]
    pub yearly: PeriodSummary,
}

impl FinancialSummary {
    pub fn period(&self, name: &str) -> &PeriodSummary {
        match name {
            "daily" => &self.daily,
            "monthly" => &self.monthly,
            _ => &self.yearly,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "orderId", default)]
    pub order_id: String,
    #[serde(default)]
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "paymentMethod", default)]
    pub payment_method: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PurchaseRecord {
    #[serde(rename = "productId", default)]
    pub product_id: String,
    #[serde(rename = "productName", default)]
    pub product_name: String,
    #[serde(rename = "dateReceived", default)]
    pub date_received: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(rename = "totalCost", default)]
    pub total_cost: f64,
}

/// Paginated envelope shared by `GET /api/analytics/sales` and
/// `GET /api/analytics/purchases`.
#[derive(Debug, Clone, Deserialize)]
pub struct Paged<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(rename = "currentPage", default = "first_page")]
    pub current_page: u32,
    #[serde(rename = "totalPages", default = "first_page")]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

/// Response of `GET /api/refunds/dashboard`: counts keyed by status label.
/// BTreeMap keeps tile order stable across reloads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReturnsRefundsStats {
    #[serde(default)]
    pub returns: BTreeMap<String, u64>,
    #[serde(default)]
    pub refunds: BTreeMap<String, u64>,
}

impl ReturnsRefundsStats {
    pub fn total_returns(&self) -> u64 {
        self.returns.values().sum()
    }

    pub fn refund_count(&self, status: &str) -> u64 {
        self.refunds.get(status).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_item_classifies() {
        let item: StockItem = serde_json::from_str(
            r#"{"name": "Turmeric", "quantity": 49, "totalValue": 24500}"#,
        )
        .unwrap();
        assert_eq!(item.status(), StockStatus::Low);
    }

    #[test]
    fn test_financial_summary_tolerates_partial_payload() {
        let summary: FinancialSummary =
            serde_json::from_str(r#"{"daily": {"sales": 1200.5}}"#).unwrap();
        assert_eq!(summary.daily.sales, 1200.5);
        assert_eq!(summary.daily.profit, 0.0);
        assert_eq!(summary.period("monthly").sales, 0.0);
    }

    #[test]
    fn test_refunds_dashboard_counts() {
        let stats: ReturnsRefundsStats = serde_json::from_str(
            r#"{"returns": {"Pending": 3, "Approved": 2}, "refunds": {"Completed": 1}}"#,
        )
        .unwrap();
        assert_eq!(stats.total_returns(), 5);
        assert_eq!(stats.refund_count("Completed"), 1);
        assert_eq!(stats.refund_count("Failed"), 0);
    }

    #[test]
    fn test_paged_defaults() {
        let page: Paged<SaleRecord> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
    }
}
