use contracts::domain::order::{Order, ORDER_STATUS_OPTIONS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::message_box::{ErrorBox, SuccessNotice};
use crate::shared::format::{format_date, format_money};

/// Customer orders: status management and expandable details.
///
/// The one list that patches its local state instead of refetching after an
/// update: a status change rewrites just the affected order.
#[component]
pub fn OrdersList() -> impl IntoView {
    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (expanded_id, set_expanded_id) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_orders().await {
            Ok(list) => set_orders.set(list),
            Err(e) => {
                log::error!("Error fetching orders: {}", e);
                set_error.set(Some("Failed to fetch orders".to_string()));
            }
        }
        set_loading.set(false);
    });

    let show_notice = move |text: String| {
        set_notice.set(Some(text));
        spawn_local(async move {
            TimeoutFuture::new(3_000).await;
            set_notice.set(None);
        });
    };

    let on_status_change = Callback::new(move |(id, status): (String, String)| {
        spawn_local(async move {
            match api::update_status(&id, &status).await {
                Ok(()) => {
                    set_orders.update(|list| {
                        if let Some(order) = list.iter_mut().find(|o| o.id == id) {
                            order.status = status.clone();
                        }
                    });
                    show_notice(format!("Order status updated to {}", status));
                }
                Err(e) => {
                    log::error!("Error updating status: {}", e);
                    set_error.set(Some("Failed to update order status".to_string()));
                }
            }
        });
    });

    let on_toggle = Callback::new(move |id: String| {
        set_expanded_id.update(|current| {
            if current.as_deref() == Some(id.as_str()) {
                *current = None;
            } else {
                *current = Some(id);
            }
        });
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Orders"</h1>
                </div>
            </div>

            <SuccessNotice message=Signal::derive(move || notice.get()) />
            <ErrorBox message=Signal::derive(move || error.get()) />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__hint">"Loading orders..."</p> }
            >
                <Show
                    when=move || !orders.get().is_empty()
                    fallback=|| view! { <p class="page__hint">"No orders found."</p> }
                >
                    {move || orders.get().into_iter().map(|order| view! {
                        <OrderCard
                            order=order
                            expanded_id=expanded_id
                            on_toggle=on_toggle
                            on_status_change=on_status_change
                        />
                    }).collect_view()}
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn OrderCard(
    order: Order,
    expanded_id: ReadSignal<Option<String>>,
    on_toggle: Callback<String>,
    on_status_change: Callback<(String, String)>,
) -> impl IntoView {
    let id = order.id.clone();
    let customer = order.customer_name();
    let date = format_date(order.date);
    let total = format_money(order.total_amount);
    let status = order.status.clone();
    let email = order.email.clone();
    let phone = order.phone.clone();
    let items = order.items.clone();

    let is_expanded = Signal::derive({
        let id = id.clone();
        move || expanded_id.get().as_deref() == Some(id.as_str())
    });

    let status_accent = move |s: &str| match s {
        "Delivered" => "status-badge status-badge--success",
        "Shipped" => "status-badge status-badge--info",
        "Ready To Ship" => "status-badge status-badge--warning",
        _ => "status-badge status-badge--neutral",
    };

    let select_id = id.clone();
    let toggle_id = id.clone();

    view! {
        <div class="card order-card">
            <div class="order-card__summary">
                <div class="order-card__meta">
                    <span class="order-card__id">{format!("#{}", id.clone())}</span>
                    <span class="order-card__customer">{customer}</span>
                    <span class="order-card__date">{date}</span>
                    <span class="order-card__total">{total}</span>
                    <span class=status_accent(&status)>{status.clone()}</span>
                </div>
                <div class="order-card__controls">
                    <select
                        class="order-card__status-select"
                        prop:value=status.clone()
                        on:change=move |ev| {
                            let new_status = event_target_value(&ev);
                            on_status_change.run((select_id.clone(), new_status));
                        }
                    >
                        {ORDER_STATUS_OPTIONS.iter().map(|option| view! {
                            <option value=*option selected={*option == status}>{*option}</option>
                        }).collect_view()}
                    </select>
                    <button
                        class="button button--secondary"
                        on:click=move |_| on_toggle.run(toggle_id.clone())
                    >
                        {move || if is_expanded.get() { "Hide Details" } else { "View Details" }}
                    </button>
                </div>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="order-card__details">
                    <p><span class="order-card__label">"Email: "</span>{email.clone()}</p>
                    <p><span class="order-card__label">"Phone: "</span>{phone.clone()}</p>

                    {
                        let items = items.clone();
                        view! {
                    <Show when={
                        let items = items.clone();
                        move || !items.is_empty()
                    }>
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Item"</th>
                                    <th class="table__header-cell">"Quantity"</th>
                                    <th class="table__header-cell">"Price"</th>
                                    <th class="table__header-cell">"Total"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items.clone().into_iter().map(|item| {
                                    let line_total = format_money(item.price * item.quantity);
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{item.name.clone()}</td>
                                            <td class="table__cell">{item.quantity}</td>
                                            <td class="table__cell">{format_money(item.price)}</td>
                                            <td class="table__cell">{line_total}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </Show>
                        }
                    }
                </div>
            </Show>
        </div>
    }
}
