//! Stock level classification.
//!
//! One pure function shared by every screen that shows a stock band
//! (home dashboard, stock dashboard, inventory). Bands are
//! inclusive-low / exclusive-high: `quantity < 50` is Low, `50..100` is
//! Medium, `>= 100` is Good.

use serde::{Deserialize, Serialize};

/// Below this quantity a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: f64 = 50.0;
/// Below this quantity (and at or above [`LOW_STOCK_THRESHOLD`]) a product
/// counts as medium stock.
pub const MEDIUM_STOCK_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    Low,
    Medium,
    Good,
}

impl StockStatus {
    /// Classify an on-hand quantity into its band.
    pub fn classify(quantity: f64) -> Self {
        if quantity < LOW_STOCK_THRESHOLD {
            StockStatus::Low
        } else if quantity < MEDIUM_STOCK_THRESHOLD {
            StockStatus::Medium
        } else {
            StockStatus::Good
        }
    }

    /// Display label used across screens.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Low => "Low",
            StockStatus::Medium => "Medium",
            StockStatus::Good => "Good",
        }
    }

    /// CSS accent suffix for badges and bars.
    pub fn accent(&self) -> &'static str {
        match self {
            StockStatus::Low => "error",
            StockStatus::Medium => "warning",
            StockStatus::Good => "success",
        }
    }

    /// All bands, in display order. Used to build filter dropdowns.
    pub fn all() -> [StockStatus; 3] {
        [StockStatus::Low, StockStatus::Medium, StockStatus::Good]
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(StockStatus::classify(49.0), StockStatus::Low);
        assert_eq!(StockStatus::classify(50.0), StockStatus::Medium);
        assert_eq!(StockStatus::classify(99.0), StockStatus::Medium);
        assert_eq!(StockStatus::classify(100.0), StockStatus::Good);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(StockStatus::classify(0.0), StockStatus::Low);
        assert_eq!(StockStatus::classify(49.9), StockStatus::Low);
        assert_eq!(StockStatus::classify(1_000_000.0), StockStatus::Good);
    }

    #[test]
    fn test_labels() {
        assert_eq!(StockStatus::Low.label(), "Low");
        assert_eq!(StockStatus::Medium.label(), "Medium");
        assert_eq!(StockStatus::Good.label(), "Good");
    }
}
