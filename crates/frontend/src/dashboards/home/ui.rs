use contracts::analytics::{FinancialSummary, StockItem};
use contracts::shared::stock::StockStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::finance::api as finance_api;
use crate::dashboards::stock::api as stock_api;
use crate::shared::components::message_box::ErrorBox;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::{format_money, format_quantity};

/// Landing dashboard: inventory totals plus the financial summary, each from
/// its own fetch.
#[component]
pub fn HomeDashboard() -> impl IntoView {
    let (stock, set_stock) = signal::<Vec<StockItem>>(Vec::new());
    let (summary, set_summary) = signal::<Option<FinancialSummary>>(None);
    let (stock_loading, set_stock_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match stock_api::fetch_stock().await {
            Ok(items) => set_stock.set(items),
            Err(e) => {
                log::error!("Failed to fetch stock data: {}", e);
                set_error.set(Some("Failed to fetch stock data.".to_string()));
            }
        }
        set_stock_loading.set(false);
    });

    spawn_local(async move {
        match finance_api::fetch_summary().await {
            Ok(data) => set_summary.set(Some(data)),
            Err(e) => log::error!("Failed to load financial summary: {}", e),
        }
    });

    let total_products = Signal::derive(move || Some(stock.with(|s| s.len()).to_string()));
    let total_items = Signal::derive(move || {
        Some(format_quantity(stock.with(|s| {
            s.iter().map(|item| item.quantity).sum::<f64>()
        })))
    });
    let inventory_value = Signal::derive(move || {
        Some(format_money(stock.with(|s| {
            s.iter().map(|item| item.total_value).sum::<f64>()
        })))
    });
    let daily_sales = Signal::derive(move || {
        summary.get().map(|s| format_money(s.daily.sales))
    });
    let monthly_profit = Signal::derive(move || {
        summary.get().map(|s| format_money(s.monthly.profit))
    });

    let low_stock_count = Signal::derive(move || {
        stock.with(|s| {
            s.iter()
                .filter(|item| item.status() == StockStatus::Low)
                .count()
        })
    });

    let band_count = move |band: StockStatus| {
        stock.with(|s| s.iter().filter(|item| item.status() == band).count())
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"INVEXA Overview"</h1>
                </div>
            </div>

            <ErrorBox message=Signal::derive(move || error.get()) />

            <Show
                when=move || !stock_loading.get()
                fallback=|| view! { <p class="page__hint">"Loading dashboard..."</p> }
            >
                <div class="stat-row">
                    <StatCard
                        label="Total Products".to_string()
                        icon_name="products".to_string()
                        value=total_products
                    />
                    <StatCard
                        label="Total Items".to_string()
                        icon_name="inventory".to_string()
                        value=total_items
                    />
                    <StatCard
                        label="Inventory Value".to_string()
                        icon_name="money".to_string()
                        value=inventory_value
                    />
                    <StatCard
                        label="Today's Sales".to_string()
                        icon_name="chart".to_string()
                        value=daily_sales
                        accent="success"
                    />
                    <StatCard
                        label="Monthly Profit".to_string()
                        icon_name="chart".to_string()
                        value=monthly_profit
                        accent="success"
                    />
                </div>

                {move || {
                    let count = low_stock_count.get();
                    (count > 0).then(|| view! {
                        <div class="warning-box" style="margin-bottom: var(--spacing-md);">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">
                                {format!("Warning: {} product(s) with low inventory", count)}
                            </span>
                        </div>
                    })
                }}

                <div class="stat-row">
                    {StockStatus::all().into_iter().map(|band| {
                        let label = format!("{} Stock", band.label());
                        let accent = band.accent().to_string();
                        view! {
                            <StatCard
                                label=label
                                icon_name="inventory".to_string()
                                value=Signal::derive(move || Some(band_count(band).to_string()))
                                accent=accent
                            />
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
