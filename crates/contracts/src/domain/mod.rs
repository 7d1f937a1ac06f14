pub mod order;
pub mod product;
pub mod purchase;
pub mod returns;
pub mod selling_price;
pub mod supplier;
