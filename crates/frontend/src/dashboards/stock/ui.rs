use contracts::analytics::StockItem;
use contracts::shared::stock::StockStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::message_box::ErrorBox;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::format::{format_money, format_quantity};

/// Stock overview: totals, low-stock alert, band distribution and the
/// classified product table.
#[component]
pub fn StockDashboard() -> impl IntoView {
    let (data, set_data) = signal::<Vec<StockItem>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let (search_term, set_search_term) = signal(String::new());
    let (status_filter, set_status_filter) = signal("All".to_string());

    spawn_local(async move {
        match api::fetch_stock().await {
            Ok(items) => set_data.set(items),
            Err(e) => {
                log::error!("Error fetching stock data: {}", e);
                set_error.set(Some("An error occurred while fetching the data.".to_string()));
            }
        }
        set_loading.set(false);
    });

    let total_products = Signal::derive(move || Some(data.with(|d| d.len()).to_string()));
    let total_items = Signal::derive(move || {
        Some(format_quantity(data.with(|d| {
            d.iter().map(|item| item.quantity).sum::<f64>()
        })))
    });
    let total_value = Signal::derive(move || {
        Some(format_money(data.with(|d| {
            d.iter().map(|item| item.total_value).sum::<f64>()
        })))
    });

    let low_stock_items = Signal::derive(move || {
        data.with(|d| {
            d.iter()
                .filter(|item| item.status() == StockStatus::Low)
                .map(|item| item.name.clone())
                .collect::<Vec<_>>()
        })
    });

    let band_count = move |band: StockStatus| {
        data.with(|d| d.iter().filter(|item| item.status() == band).count())
    };

    let filtered = move || {
        let term = search_term.get().to_lowercase();
        let filter = status_filter.get();
        data.get()
            .into_iter()
            .filter(|item| {
                let matches_search =
                    term.is_empty() || item.name.to_lowercase().contains(&term);
                let matches_status = filter == "All" || item.status().label() == filter;
                matches_search && matches_status
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Stock Dashboard"</h1>
                </div>
            </div>

            <ErrorBox message=Signal::derive(move || error.get()) />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__hint">"Loading inventory data..."</p> }
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
                        accent="success"
                    />
                    <StatCard
                        label="Total Inventory Value".to_string()
                        icon_name="money".to_string()
                        value=total_value
                    />
                </div>

                {move || {
                    let low = low_stock_items.get();
                    (!low.is_empty()).then(|| view! {
                        <div class="warning-box" style="margin-bottom: var(--spacing-md);">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">
                                {format!(
                                    "Warning: {} product(s) with low inventory: {}",
                                    low.len(),
                                    low.join(", ")
                                )}
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
                                icon_name="chart".to_string()
                                value=Signal::derive(move || Some(band_count(band).to_string()))
                                accent=accent
                            />
                        }
                    }).collect_view()}
                </div>

                <div class="filter-bar">
                    <input
                        type="text"
                        class="filter-bar__search"
                        placeholder="Search Product"
                        prop:value=move || search_term.get()
                        on:input=move |ev| set_search_term.set(event_target_value(&ev))
                    />
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                    >
                        <option value="All">"All"</option>
                        {StockStatus::all().into_iter().map(|band| view! {
                            <option value=band.label()>{band.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Quantity"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Total Value"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || filtered().into_iter().map(|item| {
                                let status = item.status();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{item.name.clone()}</td>
                                        <td class="table__cell">{format_quantity(item.quantity)}</td>
                                        <td class="table__cell">
                                            <StatusBadge
                                                label=Signal::derive(move || status.label().to_string())
                                                accent=Signal::derive(move || status.accent())
                                            />
                                        </td>
                                        <td class="table__cell">{format_money(item.total_value)}</td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
