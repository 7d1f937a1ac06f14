use contracts::analytics::{PurchaseRecord, SaleRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::components::message_box::ErrorBox;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::format::{format_date, format_money, format_quantity};

/// Sales and purchase transactions, server-paginated per tab.
#[component]
pub fn TransactionsPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal("sales");
    let (sales, set_sales) = signal::<Vec<SaleRecord>>(Vec::new());
    let (purchases, set_purchases) = signal::<Vec<PurchaseRecord>>(Vec::new());
    let (current_page, set_current_page) = signal(1u32);
    let (total_pages, set_total_pages) = signal(1u32);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move |tab: &'static str, page: u32| {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            if tab == "sales" {
                match api::fetch_sales(page).await {
                    Ok(result) => {
                        set_sales.set(result.data);
                        set_current_page.set(result.current_page);
                        set_total_pages.set(result.total_pages);
                    }
                    Err(e) => {
                        log::error!("Failed to load sales: {}", e);
                        set_error.set(Some("Failed to load data".to_string()));
                    }
                }
            } else {
                match api::fetch_purchases(page).await {
                    Ok(result) => {
                        set_purchases.set(result.data);
                        set_current_page.set(result.current_page);
                        set_total_pages.set(result.total_pages);
                    }
                    Err(e) => {
                        log::error!("Failed to load purchases: {}", e);
                        set_error.set(Some("Failed to load data".to_string()));
                    }
                }
            }
            set_loading.set(false);
        });
    };

    fetch("sales", 1);

    let switch_tab = move |tab: &'static str| {
        set_active_tab.set(tab);
        set_current_page.set(1);
        set_total_pages.set(1);
        fetch(tab, 1);
    };

    let on_page_change = Callback::new(move |page: u32| {
        fetch(active_tab.get_untracked(), page);
    });

    let sale_status_accent = |status: &str| match status {
        "completed" => "success",
        "pending" => "warning",
        _ => "error",
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Transaction Details"</h1>
                </div>
                <div class="header__actions">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Button
                            appearance=Signal::derive(move || if active_tab.get() == "sales" {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Subtle
                            })
                            size=ButtonSize::Small
                            on_click=move |_| switch_tab("sales")
                        >
                            "Sales"
                        </Button>
                        <Button
                            appearance=Signal::derive(move || if active_tab.get() == "purchases" {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Subtle
                            })
                            size=ButtonSize::Small
                            on_click=move |_| switch_tab("purchases")
                        >
                            "Purchases"
                        </Button>
                    </Flex>
                </div>
            </div>

            <ErrorBox message=Signal::derive(move || error.get()) />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__hint">"Loading transactions..."</p> }
            >
                {move || if active_tab.get() == "sales" {
                    view! {
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Order ID"</th>
                                        <th class="table__header-cell">"Date"</th>
                                        <th class="table__header-cell">"Amount"</th>
                                        <th class="table__header-cell">"Status"</th>
                                        <th class="table__header-cell">"Payment"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {sales.get().into_iter().map(|record| {
                                        let accent = sale_status_accent(&record.status);
                                        let status = if record.status.is_empty() {
                                            "unknown".to_string()
                                        } else {
                                            record.status.clone()
                                        };
                                        let date = record
                                            .date
                                            .map(format_date)
                                            .unwrap_or_else(|| "N/A".to_string());
                                        let payment = if record.payment_method.is_empty() {
                                            "N/A".to_string()
                                        } else {
                                            record.payment_method.clone()
                                        };
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{format!("#{}", record.order_id)}</td>
                                                <td class="table__cell">{date}</td>
                                                <td class="table__cell">{format_money(record.amount)}</td>
                                                <td class="table__cell">
                                                    <StatusBadge
                                                        label=Signal::derive(move || status.clone())
                                                        accent=Signal::derive(move || accent)
                                                    />
                                                </td>
                                                <td class="table__cell">{payment}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Product ID"</th>
                                        <th class="table__header-cell">"Product"</th>
                                        <th class="table__header-cell">"Date Received"</th>
                                        <th class="table__header-cell">"Qty"</th>
                                        <th class="table__header-cell">"Total"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {purchases.get().into_iter().map(|record| {
                                        let name = if record.product_name.is_empty() {
                                            "Unnamed Product".to_string()
                                        } else {
                                            record.product_name.clone()
                                        };
                                        let date = record
                                            .date_received
                                            .map(format_date)
                                            .unwrap_or_else(|| "N/A".to_string());
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{format!("#{}", record.product_id)}</td>
                                                <td class="table__cell">{name}</td>
                                                <td class="table__cell">{date}</td>
                                                <td class="table__cell">{format_quantity(record.quantity)}</td>
                                                <td class="table__cell">{format_money(record.total_cost)}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }}

                <PaginationControls
                    current_page=current_page
                    total_pages=total_pages
                    on_page_change=on_page_change
                />
            </Show>
        </div>
    }
}
