use contracts::domain::purchase::{PurchaseRequest, ReceiptEntry, ReceiveDeliveryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::api;
use crate::shared::components::message_box::{ErrorBox, SuccessNotice};
use crate::shared::format::format_date;

/// One editable receipt line. Quantity and price stay raw strings while the
/// user types; they are parsed on submit.
#[derive(Clone, Default)]
struct EntryForm {
    product: String,
    product_name: String,
    requested_quantity: Option<u32>,
    quantity_received: String,
    price_per_unit: String,
    supplier_name: String,
    purchase_request: String,
    notes: String,
}

impl EntryForm {
    fn to_receipt(&self) -> ReceiptEntry {
        ReceiptEntry {
            product: self.product.clone(),
            quantity_received: self.quantity_received.trim().parse().unwrap_or(0.0),
            price_per_unit: self.price_per_unit.trim().parse().unwrap_or(0.0),
            supplier_name: self.supplier_name.clone(),
            purchase_request: self.purchase_request.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Record a supplier delivery against a pending purchase request.
#[component]
pub fn ReceiveDelivery() -> impl IntoView {
    let (requests, set_requests) = signal::<Vec<PurchaseRequest>>(Vec::new());
    let (selected_request, set_selected_request) = signal::<Option<String>>(None);
    let entries = RwSignal::new(Vec::<EntryForm>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let fetch_requests = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_pending_requests().await {
                Ok(list) => set_requests.set(list),
                Err(e) => {
                    log::error!("Error fetching purchase requests: {}", e);
                    set_error.set(Some("Failed to load data from server".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    fetch_requests();

    let on_select = Callback::new(move |request: PurchaseRequest| {
        let request_id = request.id.clone();
        let new_entries: Vec<EntryForm> = request
            .products
            .iter()
            .map(|item| EntryForm {
                product: item.product.id().to_string(),
                product_name: item
                    .product
                    .name()
                    .unwrap_or("Unknown Product")
                    .to_string(),
                requested_quantity: Some(item.requested_quantity),
                purchase_request: request_id.clone(),
                notes: item.notes.clone(),
                ..Default::default()
            })
            .collect();
        entries.set(new_entries);
        set_selected_request.set(Some(request_id));
    });

    let add_manual_entry = move |_| {
        let request_id = selected_request.get_untracked().unwrap_or_default();
        entries.update(|list| {
            list.push(EntryForm {
                purchase_request: request_id.clone(),
                ..Default::default()
            });
        });
    };

    let handle_submit = move |_| {
        let valid: Vec<ReceiptEntry> = entries.with_untracked(|list| {
            list.iter()
                .map(EntryForm::to_receipt)
                .filter(ReceiptEntry::is_valid)
                .collect()
        });

        if valid.is_empty() {
            set_error.set(Some(
                "Please add at least one valid entry with quantity and price".to_string(),
            ));
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::submit_receipts(&ReceiveDeliveryDto { entries: valid }).await {
                Ok(()) => {
                    set_notice.set(Some(
                        "Products received and stock updated successfully!".to_string(),
                    ));
                    set_selected_request.set(None);
                    entries.set(Vec::new());
                    fetch_requests();
                }
                Err(e) => {
                    log::error!("Error submitting entries: {}", e);
                    set_error.set(Some(format!("Failed to record deliveries: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    let entry_count = Memo::new(move |_| entries.with(|list| list.len()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Record Supplier Delivery"</h1>
                </div>
            </div>

            <SuccessNotice message=Signal::derive(move || notice.get()) />
            <ErrorBox message=Signal::derive(move || error.get()) />

            <Show when=move || loading.get()>
                <p class="page__hint">"Loading..."</p>
            </Show>

            <h2 class="page__section-title">"Select Purchase Request"</h2>
            {move || {
                let rows = requests.get();
                if rows.is_empty() {
                    view! {
                        <p class="page__hint">"No pending purchase requests found"</p>
                    }.into_any()
                } else {
                    view! {
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Products"</th>
                                        <th class="table__header-cell">"Date"</th>
                                        <th class="table__header-cell">"Items"</th>
                                        <th class="table__header-cell">"Status"</th>
                                        <th class="table__header-cell">"Action"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows.into_iter().map(|request| {
                                        let summary = request.products_summary();
                                        let date = format_date(request.request_date);
                                        let item_count = request.products.len();
                                        let status = request.status.clone();
                                        let is_selected = {
                                            let id = request.id.clone();
                                            move || selected_request.get().as_deref() == Some(id.as_str())
                                        };
                                        let select_request = request.clone();
                                        view! {
                                            <tr class=move || {
                                                if is_selected() {
                                                    "table__row table__row--selected"
                                                } else {
                                                    "table__row"
                                                }
                                            }>
                                                <td class="table__cell">{summary}</td>
                                                <td class="table__cell">{date}</td>
                                                <td class="table__cell">{item_count}</td>
                                                <td class="table__cell">
                                                    <span class="status-badge status-badge--warning">{status}</span>
                                                </td>
                                                <td class="table__cell">
                                                    <button
                                                        class="button button--secondary"
                                                        on:click=move |_| on_select.run(select_request.clone())
                                                    >
                                                        "Select"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()}
                                </tbody>
                            </table>
                        </div>
                    }.into_any()
                }
            }}

            <Show when=move || selected_request.get().is_some()>
                <h2 class="page__section-title">"Record Received Items"</h2>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Product"</th>
                                <th class="table__header-cell">"Requested Qty"</th>
                                <th class="table__header-cell">"Received Qty"</th>
                                <th class="table__header-cell">"Price Per Unit"</th>
                                <th class="table__header-cell">"Supplier"</th>
                                <th class="table__header-cell">"Remove"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || (0..entry_count.get()).map(|i| {
                                view! { <EntryRow entries=entries index=i /> }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=add_manual_entry
                    >
                        "+ Add New Entry"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_submit
                    >
                        "Submit Entries"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn EntryRow(entries: RwSignal<Vec<EntryForm>>, index: usize) -> impl IntoView {
    let field = move |get: fn(&EntryForm) -> String| {
        entries.with(|list| list.get(index).map(get).unwrap_or_default())
    };

    view! {
        <tr class="table__row">
            <td class="table__cell">
                {move || field(|e| e.product_name.clone())}
            </td>
            <td class="table__cell">
                {move || {
                    entries.with(|list| {
                        list.get(index)
                            .and_then(|e| e.requested_quantity)
                            .map(|q| q.to_string())
                            .unwrap_or_else(|| "—".to_string())
                    })
                }}
            </td>
            <td class="table__cell">
                <input
                    type="number"
                    class="table__input table__input--qty"
                    prop:value=move || field(|e| e.quantity_received.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        entries.update(|list| {
                            if let Some(entry) = list.get_mut(index) {
                                entry.quantity_received = value;
                            }
                        });
                    }
                />
            </td>
            <td class="table__cell">
                <input
                    type="number"
                    class="table__input table__input--qty"
                    prop:value=move || field(|e| e.price_per_unit.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        entries.update(|list| {
                            if let Some(entry) = list.get_mut(index) {
                                entry.price_per_unit = value;
                            }
                        });
                    }
                />
            </td>
            <td class="table__cell">
                <input
                    type="text"
                    class="table__input"
                    prop:value=move || field(|e| e.supplier_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        entries.update(|list| {
                            if let Some(entry) = list.get_mut(index) {
                                entry.supplier_name = value;
                            }
                        });
                    }
                />
            </td>
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--danger"
                    title="Remove entry"
                    on:click=move |_| {
                        entries.update(|list| {
                            if index < list.len() {
                                list.remove(index);
                            }
                        });
                    }
                >
                    "✕"
                </button>
            </td>
        </tr>
    }
}
