use contracts::analytics::FinancialSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::message_box::ErrorBox;
use crate::shared::components::stat_card::StatCard;
use crate::shared::format::format_money;

const PERIODS: [(&str, &str); 3] = [
    ("daily", "Daily"),
    ("monthly", "Monthly"),
    ("yearly", "Yearly"),
];

/// Sales, purchases and profit across the daily/monthly/yearly windows.
#[component]
pub fn FinancialDashboard() -> impl IntoView {
    let (summary, set_summary) = signal::<Option<FinancialSummary>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_summary().await {
            Ok(data) => set_summary.set(Some(data)),
            Err(e) => {
                log::error!("Failed to load financial summary: {}", e);
                set_error.set(Some(
                    "Failed to load financial data. Please try again.".to_string(),
                ));
            }
        }
        set_loading.set(false);
    });

    let metric = move |period: &'static str, pick: fn(&contracts::analytics::PeriodSummary) -> f64| {
        Signal::derive(move || {
            summary
                .get()
                .map(|s| format_money(pick(s.period(period))))
        })
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Financial Dashboard"</h1>
                </div>
            </div>

            <ErrorBox message=Signal::derive(move || error.get()) />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__hint">"Loading financial data..."</p> }
            >
                <div class="stat-row">
                    <StatCard
                        label="Today's Sales".to_string()
                        icon_name="money".to_string()
                        value=metric("daily", |p| p.sales)
                        accent="success"
                    />
                    <StatCard
                        label="Monthly Sales".to_string()
                        icon_name="money".to_string()
                        value=metric("monthly", |p| p.sales)
                    />
                    <StatCard
                        label="Yearly Profit".to_string()
                        icon_name="chart".to_string()
                        value=metric("yearly", |p| p.profit)
                        accent="success"
                    />
                </div>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Period"</th>
                                <th class="table__header-cell">"Sales"</th>
                                <th class="table__header-cell">"Purchases"</th>
                                <th class="table__header-cell">"Profit"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {PERIODS.into_iter().map(|(key, label)| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{label}</td>
                                    <td class="table__cell">{metric(key, |p| p.sales)}</td>
                                    <td class="table__cell">{metric(key, |p| p.purchases)}</td>
                                    <td class="table__cell">{metric(key, |p| p.profit)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
