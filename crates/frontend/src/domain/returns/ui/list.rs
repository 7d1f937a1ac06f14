use contracts::domain::returns::ReturnRequest;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::{tab_title, RETURN_DETAIL_PREFIX};
use crate::shared::components::message_box::ErrorBox;
use crate::shared::components::status_badge::StatusBadge;

/// All customer return requests.
#[component]
pub fn ReturnsList() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let (returns, set_returns) = signal::<Vec<ReturnRequest>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_returns().await {
            Ok(list) => set_returns.set(list),
            Err(e) => {
                log::error!("Error fetching returns: {}", e);
                set_error.set(Some("Failed to fetch returns".to_string()));
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Manage Returns"</h1>
                </div>
            </div>

            <ErrorBox message=Signal::derive(move || error.get()) />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__hint">"Loading returns..."</p> }
            >
                <Show
                    when=move || !returns.get().is_empty()
                    fallback=|| view! { <p class="page__hint">"No returns found."</p> }
                >
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Order ID"</th>
                                    <th class="table__header-cell">"Status"</th>
                                    <th class="table__header-cell">"Items"</th>
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || returns.get().into_iter().map(|ret| {
                                    let status = ret.status;
                                    let order_id = ret.short_order_id();
                                    let item_count = format!("{} items", ret.items.len());
                                    let tab_key = format!("{}{}", RETURN_DETAIL_PREFIX, ret.id);
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{order_id}</td>
                                            <td class="table__cell">
                                                <StatusBadge
                                                    label=Signal::derive(move || status.label().to_string())
                                                    accent=Signal::derive(move || status.accent())
                                                />
                                            </td>
                                            <td class="table__cell">{item_count}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--secondary"
                                                    on:click=move |_| {
                                                        tabs_store.open_tab(&tab_key, &tab_title(&tab_key));
                                                    }
                                                >
                                                    "Manage"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
