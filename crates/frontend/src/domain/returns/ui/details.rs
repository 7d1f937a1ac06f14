use contracts::domain::returns::{
    RefundStatus, RefundUpdateDto, ReturnRequest, ReturnStatus,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::api;
use crate::shared::components::message_box::ErrorBox;
use crate::shared::format::format_money;

/// One return request: status editor, returned items, evidence photos and
/// the linked refund. Status transitions are unconstrained on purpose.
#[component]
pub fn ReturnDetails(id: String) -> impl IntoView {
    let (return_req, set_return_req) = signal::<Option<ReturnRequest>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    // Pending selections, applied by the update buttons.
    let (status, set_status) = signal(ReturnStatus::Pending);
    let (refund_status, set_refund_status) = signal(RefundStatus::Pending);
    let (transaction_id, set_transaction_id) = signal(String::new());

    let return_id = id.clone();
    let load = move || {
        let id = return_id.clone();
        spawn_local(async move {
            match api::fetch_return(&id).await {
                Ok(data) => {
                    set_status.set(data.status);
                    if let Some(refund) = &data.refund {
                        set_refund_status.set(refund.status);
                    }
                    set_return_req.set(Some(data));
                }
                Err(e) => {
                    log::error!("Error fetching return: {}", e);
                    set_error.set(Some("Failed to load return".to_string()));
                }
            }
        });
    };

    load();

    let status_id = id.clone();
    let handle_status_update = move |_| {
        let id = status_id.clone();
        let new_status = status.get_untracked();
        spawn_local(async move {
            match api::update_return_status(&id, new_status).await {
                Ok(updated) => {
                    set_status.set(updated.status);
                    set_return_req.set(Some(updated));
                }
                Err(e) => {
                    log::error!("Error updating status: {}", e);
                    set_error.set(Some("Failed to update return status".to_string()));
                }
            }
        });
    };

    let handle_refund_update = {
        let load = load.clone();
        move |_| {
            let Some(refund_id) = return_req
                .get_untracked()
                .and_then(|r| r.refund.map(|refund| refund.id))
            else {
                return;
            };
            let dto = RefundUpdateDto {
                status: refund_status.get_untracked(),
                transaction_id: transaction_id.get_untracked(),
            };
            let load = load.clone();
            spawn_local(async move {
                match api::update_refund(&refund_id, &dto).await {
                    Ok(()) => load(),
                    Err(e) => {
                        log::error!("Error updating refund: {}", e);
                        set_error.set(Some("Failed to update refund".to_string()));
                    }
                }
            });
        }
    };

    view! {
        <div class="page page--narrow">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Return Details"</h1>
                </div>
            </div>

            <ErrorBox message=Signal::derive(move || error.get()) />

            {move || match return_req.get() {
                None => view! { <p class="page__hint">"Loading..."</p> }.into_any(),
                Some(ret) => {
                    let order_id = ret
                        .order
                        .as_ref()
                        .map(|o| o.id.clone())
                        .unwrap_or_else(|| "N/A".to_string());
                    let items = ret.items.clone();
                    let images = ret.images.clone();
                    let refund = ret.refund.clone();
                    let handle_refund_update = handle_refund_update.clone();
                    view! {
                        <div class="card">
                            <div class="details-grid">
                                <div>
                                    <p class="details-grid__label">"Order ID:"</p>
                                    <p>{order_id}</p>
                                </div>
                                <div>
                                    <p class="details-grid__label">"Current Status:"</p>
                                    <select
                                        prop:value=move || status.get().label().to_string()
                                        on:change=move |ev| {
                                            if let Some(parsed) = ReturnStatus::parse(&event_target_value(&ev)) {
                                                set_status.set(parsed);
                                            }
                                        }
                                    >
                                        {ReturnStatus::all().into_iter().map(|option| view! {
                                            <option value=option.label()>{option.label()}</option>
                                        }).collect_view()}
                                    </select>
                                    <Button
                                        appearance=ButtonAppearance::Primary
                                        size=ButtonSize::Small
                                        on_click=handle_status_update.clone()
                                    >
                                        "Update Status"
                                    </Button>
                                </div>
                            </div>

                            <h2 class="page__section-title">"Return Items"</h2>
                            <div class="return-items">
                                {items.into_iter().map(|item| view! {
                                    <div class="return-items__item">
                                        <p class="return-items__name">{item.name.clone()}</p>
                                        <p>{format!("Quantity: {}", item.quantity)}</p>
                                        <p>{format!("Reason: {}", item.reason)}</p>
                                    </div>
                                }).collect_view()}
                            </div>

                            <h2 class="page__section-title">"Evidence Photos"</h2>
                            <div class="evidence-grid">
                                {images.into_iter().enumerate().map(|(i, img)| view! {
                                    <img
                                        class="evidence-grid__photo"
                                        src=img
                                        alt=format!("Evidence {}", i + 1)
                                    />
                                }).collect_view()}
                            </div>

                            {refund.map(|refund| {
                                let amount = format_money(refund.amount);
                                view! {
                                    <div class="refund-section">
                                        <h2 class="page__section-title">"Refund Details"</h2>
                                        <div class="details-grid">
                                            <div>
                                                <p class="details-grid__label">"Amount:"</p>
                                                <p>{amount}</p>
                                            </div>
                                            <div>
                                                <p class="details-grid__label">"Refund Status:"</p>
                                                <select
                                                    prop:value=move || refund_status.get().label().to_string()
                                                    on:change=move |ev| {
                                                        if let Some(parsed) = RefundStatus::parse(&event_target_value(&ev)) {
                                                            set_refund_status.set(parsed);
                                                        }
                                                    }
                                                >
                                                    {RefundStatus::all().into_iter().map(|option| view! {
                                                        <option value=option.label()>{option.label()}</option>
                                                    }).collect_view()}
                                                </select>
                                            </div>
                                            <div>
                                                <p class="details-grid__label">"Transaction ID:"</p>
                                                <input
                                                    type="text"
                                                    placeholder="Enter transaction ID"
                                                    prop:value=move || transaction_id.get()
                                                    on:input=move |ev| set_transaction_id.set(event_target_value(&ev))
                                                />
                                            </div>
                                        </div>
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            on_click=handle_refund_update
                                        >
                                            "Update Refund"
                                        </Button>
                                    </div>
                                }
                            })}
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
