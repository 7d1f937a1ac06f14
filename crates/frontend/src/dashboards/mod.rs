pub mod finance;
pub mod home;
pub mod returns_refunds;
pub mod stock;
pub mod transactions;
