pub mod stock;

pub use stock::StockStatus;
