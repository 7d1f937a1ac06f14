//! Maps tab keys to screen components.
//!
//! Detail screens use dynamic keys with an id suffix
//! (`return_detail_<id>`), everything else is a fixed key opened from the
//! sidebar.

use leptos::prelude::*;

use crate::dashboards::finance::FinancialDashboard;
use crate::dashboards::home::HomeDashboard;
use crate::dashboards::returns_refunds::ReturnsRefundsDashboard;
use crate::dashboards::stock::StockDashboard;
use crate::dashboards::transactions::TransactionsPage;
use crate::domain::order::ui::OrdersList;
use crate::domain::product::ui::add::AddProduct;
use crate::domain::product::ui::list::ProductList;
use crate::domain::purchase::ui::create_request::CreateRequest;
use crate::domain::purchase::ui::receive::ReceiveDelivery;
use crate::domain::returns::ui::details::ReturnDetails;
use crate::domain::returns::ui::list::ReturnsList;
use crate::domain::selling_price::ui::PriceManager;
use crate::domain::supplier::ui::form::SupplierForm;
use crate::domain::supplier::ui::list::SupplierList;
use crate::system::users::BuyersList;

pub const RETURN_DETAIL_PREFIX: &str = "return_detail_";

/// Human title for a tab key, used by the sidebar, the tab strip and the
/// `?active=` restore path.
pub fn tab_title(key: &str) -> String {
    if let Some(id) = key.strip_prefix(RETURN_DETAIL_PREFIX) {
        let start = id.len().saturating_sub(8);
        return format!("Return {}", &id[start..]);
    }
    match key {
        "home" => "Home",
        "stock" => "Stock Dashboard",
        "finance" => "Financial Dashboard",
        "transactions" => "Transactions",
        "returns_dashboard" => "Returns & Refunds",
        "inventory" => "Product Inventory",
        "add_product" => "Add Product",
        "create_request" => "Create Request",
        "receive_delivery" => "Receive Delivery",
        "suppliers" => "Supplier List",
        "add_supplier" => "Add Supplier",
        "orders" => "Orders",
        "buyers" => "Buyers",
        "returns" => "Manage Returns",
        "price_manager" => "Price Manager",
        other => other,
    }
    .to_string()
}

/// Resolve a tab key to its screen.
pub fn resolve(key: &str) -> AnyView {
    if let Some(id) = key.strip_prefix(RETURN_DETAIL_PREFIX) {
        let id = id.to_string();
        return view! { <ReturnDetails id=id /> }.into_any();
    }
    match key {
        "home" => view! { <HomeDashboard /> }.into_any(),
        "stock" => view! { <StockDashboard /> }.into_any(),
        "finance" => view! { <FinancialDashboard /> }.into_any(),
        "transactions" => view! { <TransactionsPage /> }.into_any(),
        "returns_dashboard" => view! { <ReturnsRefundsDashboard /> }.into_any(),
        "inventory" => view! { <ProductList /> }.into_any(),
        "add_product" => view! { <AddProduct /> }.into_any(),
        "create_request" => view! { <CreateRequest /> }.into_any(),
        "receive_delivery" => view! { <ReceiveDelivery /> }.into_any(),
        "suppliers" => view! { <SupplierList /> }.into_any(),
        "add_supplier" => view! { <SupplierForm /> }.into_any(),
        "orders" => view! { <OrdersList /> }.into_any(),
        "buyers" => view! { <BuyersList /> }.into_any(),
        "returns" => view! { <ReturnsList /> }.into_any(),
        "price_manager" => view! { <PriceManager /> }.into_any(),
        unknown => {
            let message = format!("Unknown screen: {}", unknown);
            view! { <div class="page"><p class="page__hint">{message}</p></div> }.into_any()
        }
    }
}
