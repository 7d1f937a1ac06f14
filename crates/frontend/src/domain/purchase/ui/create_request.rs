use std::collections::HashMap;

use contracts::domain::product::Product;
use contracts::domain::purchase::{PurchaseRequestDto, RequestedItemDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::api;
use crate::domain::product::api as product_api;
use crate::shared::components::message_box::{ErrorBox, SuccessNotice};

#[derive(Clone, Default)]
struct Selection {
    requested_qty: u32,
    note: String,
    deadline: String,
}

/// Build a purchase request: pick products, quantities, notes and deadlines.
#[component]
pub fn CreateRequest() -> impl IntoView {
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    // Per-product selection keyed by product id; rows read their own entry.
    let selected = RwSignal::new(HashMap::<String, Selection>::new());

    spawn_local(async move {
        match product_api::fetch_products().await {
            Ok(list) => set_products.set(list),
            Err(e) => {
                log::error!("Failed to fetch products: {}", e);
                set_error.set(Some(
                    "Failed to fetch products. Please check your server connection.".to_string(),
                ));
            }
        }
        set_loading.set(false);
    });

    let selected_count = Memo::new(move |_| {
        selected.with(|map| map.values().filter(|s| s.requested_qty > 0).count())
    });

    let handle_submit = move |_| {
        let items: Vec<RequestedItemDto> = selected.with_untracked(|map| {
            map.iter()
                .filter(|(_, s)| s.requested_qty > 0)
                .map(|(id, s)| RequestedItemDto {
                    product: id.clone(),
                    requested_quantity: s.requested_qty,
                    notes: s.note.clone(),
                    deadline: s.deadline.clone(),
                })
                .collect()
        });

        if items.is_empty() {
            set_error.set(Some("Please select at least one product".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);
        set_notice.set(None);
        spawn_local(async move {
            match api::submit_request(&PurchaseRequestDto { products: items }).await {
                Ok(()) => {
                    set_notice.set(Some("Request created successfully.".to_string()));
                    selected.set(HashMap::new());
                }
                Err(e) => {
                    log::error!("Error creating request: {}", e);
                    set_error.set(Some("Failed to create request. Please try again.".to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Create Product Request List"</h1>
                </div>
                <div class="header__actions">
                    <span class="header__hint">
                        {move || format!("{} product(s) selected", selected_count.get())}
                    </span>
                </div>
            </div>

            <SuccessNotice message=Signal::derive(move || notice.get()) />
            <ErrorBox message=Signal::derive(move || error.get()) />

            <p class="page__hint">
                "Select products to request, specify quantities, add notes if needed, and set deadlines."
            </p>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">"Select"</th>
                            <th class="table__header-cell">"Product Name"</th>
                            <th class="table__header-cell">"Request Qty"</th>
                            <th class="table__header-cell">"Note"</th>
                            <th class="table__header-cell">"Deadline"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = products.get();
                            if rows.is_empty() {
                                let hint = if loading.get() {
                                    "Loading products..."
                                } else {
                                    "No products available"
                                };
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--empty" colspan="5">{hint}</td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|product| view! {
                                    <RequestRow product=product selected=selected />
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_submit
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if submitting.get() { "Processing..." } else { "Submit Request" }}
                </Button>
            </div>
        </div>
    }
}

#[component]
fn RequestRow(product: Product, selected: RwSignal<HashMap<String, Selection>>) -> impl IntoView {
    let id = product.id.clone();

    let entry = {
        let id = id.clone();
        move || selected.with(|map| map.get(&id).cloned().unwrap_or_default())
    };

    let update_entry = {
        let id = id.clone();
        move |f: &dyn Fn(&mut Selection)| {
            selected.update(|map| {
                let item = map.entry(id.clone()).or_default();
                f(item);
            });
        }
    };

    let checked = {
        let entry = entry.clone();
        move || entry().requested_qty > 0
    };
    let qty_value = {
        let entry = entry.clone();
        move || {
            let qty = entry().requested_qty;
            if qty == 0 {
                String::new()
            } else {
                qty.to_string()
            }
        }
    };
    let note_value = {
        let entry = entry.clone();
        move || entry().note
    };
    let deadline_value = {
        let entry = entry.clone();
        move || entry().deadline
    };

    let on_toggle = {
        let update_entry = update_entry.clone();
        move |ev: web_sys::Event| {
            let checked = event_target_checked(&ev);
            update_entry(&|s: &mut Selection| s.requested_qty = if checked { 1 } else { 0 });
        }
    };
    let on_qty = {
        let update_entry = update_entry.clone();
        move |ev: web_sys::Event| {
            let qty = event_target_value(&ev).parse::<u32>().unwrap_or(0);
            update_entry(&|s: &mut Selection| s.requested_qty = qty);
        }
    };
    let on_note = {
        let update_entry = update_entry.clone();
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            update_entry(&|s: &mut Selection| s.note = value.clone());
        }
    };
    let on_deadline = {
        let update_entry = update_entry.clone();
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            update_entry(&|s: &mut Selection| s.deadline = value.clone());
        }
    };

    view! {
        <tr class="table__row">
            <td class="table__cell table__cell--checkbox">
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=checked
                    on:change=on_toggle
                />
            </td>
            <td class="table__cell">{product.name.clone()}</td>
            <td class="table__cell">
                <input
                    type="number"
                    class="table__input table__input--qty"
                    min="0"
                    prop:value=qty_value
                    on:input=on_qty
                />
            </td>
            <td class="table__cell">
                <input
                    type="text"
                    class="table__input"
                    prop:value=note_value
                    on:input=on_note
                />
            </td>
            <td class="table__cell">
                <input
                    type="date"
                    class="table__input"
                    prop:value=deadline_value
                    on:input=on_deadline
                />
            </td>
        </tr>
    }
}
