use contracts::analytics::ReturnsRefundsStats;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::message_box::ErrorBox;
use crate::shared::components::stat_card::StatCard;

/// Returns and refunds status distribution.
#[component]
pub fn ReturnsRefundsDashboard() -> impl IntoView {
    let (stats, set_stats) = signal::<Option<ReturnsRefundsStats>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_dashboard().await {
            Ok(data) => set_stats.set(Some(data)),
            Err(e) => {
                log::error!("Failed to load returns dashboard: {}", e);
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let refund_metric = move |status: &'static str| {
        Signal::derive(move || {
            stats
                .get()
                .map(|s| s.refund_count(status).to_string())
        })
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Returns & Refunds Dashboard"</h1>
                </div>
            </div>

            <ErrorBox message=Signal::derive(move || error.get()) />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__hint">"Loading dashboard data..."</p> }
            >
                <div class="stat-row">
                    <StatCard
                        label="Total Returns".to_string()
                        icon_name="returns".to_string()
                        value=Signal::derive(move || stats.get().map(|s| s.total_returns().to_string()))
                    />
                    <StatCard
                        label="Pending Refunds".to_string()
                        icon_name="money".to_string()
                        value=refund_metric("Pending")
                        accent="warning"
                    />
                    <StatCard
                        label="Completed Refunds".to_string()
                        icon_name="money".to_string()
                        value=refund_metric("Completed")
                        accent="success"
                    />
                    <StatCard
                        label="Failed Refunds".to_string()
                        icon_name="warning".to_string()
                        value=refund_metric("Failed")
                        accent="error"
                    />
                </div>

                <div class="panel-row">
                    <div class="card">
                        <h2 class="card__title">"Return Requests"</h2>
                        <StatusCountTable
                            counts=Signal::derive(move || {
                                stats.get().map(|s| s.returns.into_iter().collect::<Vec<_>>()).unwrap_or_default()
                            })
                        />
                    </div>
                    <div class="card">
                        <h2 class="card__title">"Refund Status"</h2>
                        <StatusCountTable
                            counts=Signal::derive(move || {
                                stats.get().map(|s| s.refunds.into_iter().collect::<Vec<_>>()).unwrap_or_default()
                            })
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Status label / count rows for one distribution panel.
#[component]
fn StatusCountTable(#[prop(into)] counts: Signal<Vec<(String, u64)>>) -> impl IntoView {
    view! {
        <table class="table__data">
            <tbody>
                {move || counts.get().into_iter().map(|(status, count)| view! {
                    <tr class="table__row">
                        <td class="table__cell">{status.clone()}</td>
                        <td class="table__cell table__cell--numeric">{count}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
