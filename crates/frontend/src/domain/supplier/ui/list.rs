use contracts::domain::supplier::{Supplier, SupplierDto};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::super::api;
use crate::shared::components::message_box::{ErrorBox, SuccessNotice};

/// Supplier directory with inline row editing.
#[component]
pub fn SupplierList() -> impl IntoView {
    let (suppliers, set_suppliers) = signal::<Vec<Supplier>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    // Row edit buffer, separate from the list so typing does not re-render it.
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let edit_form = RwSignal::new(SupplierDto::default());

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_suppliers().await {
                Ok(list) => set_suppliers.set(list),
                Err(e) => {
                    log::error!("Error fetching suppliers: {}", e);
                    set_error.set(Some("Failed to fetch suppliers".to_string()));
                }
            }
        });
    };

    fetch();

    let show_notice = move |text: &'static str| {
        set_notice.set(Some(text.to_string()));
        spawn_local(async move {
            TimeoutFuture::new(3_000).await;
            set_notice.set(None);
        });
    };

    let on_save = Callback::new(move |id: String| {
        let dto = edit_form.get_untracked();
        spawn_local(async move {
            match api::update_supplier(&id, &dto).await {
                Ok(()) => {
                    show_notice("Supplier updated successfully");
                    set_editing_id.set(None);
                    fetch();
                }
                Err(e) => {
                    log::error!("Error updating supplier: {}", e);
                    set_error.set(Some("Failed to update supplier".to_string()));
                }
            }
        });
    });

    let on_delete = Callback::new(move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this supplier?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_supplier(&id).await {
                Ok(()) => {
                    show_notice("Supplier deleted successfully");
                    fetch();
                }
                Err(e) => {
                    log::error!("Error deleting supplier: {}", e);
                    set_error.set(Some("Failed to delete supplier".to_string()));
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Supplier List"</h1>
                </div>
            </div>

            <SuccessNotice message=Signal::derive(move || notice.get()) />
            <ErrorBox message=Signal::derive(move || error.get()) />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Phone"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = suppliers.get();
                            if rows.is_empty() {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--empty" colspan="5">"No suppliers found."</td>
                                    </tr>
                                }.into_any()
                            } else {
                                rows.into_iter().map(|supplier| view! {
                                    <SupplierRow
                                        supplier=supplier
                                        editing_id=editing_id
                                        set_editing_id=set_editing_id
                                        edit_form=edit_form
                                        on_save=on_save
                                        on_delete=on_delete
                                    />
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn SupplierRow(
    supplier: Supplier,
    editing_id: ReadSignal<Option<String>>,
    set_editing_id: WriteSignal<Option<String>>,
    edit_form: RwSignal<SupplierDto>,
    on_save: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = supplier.id.clone();
    let is_editing = Signal::derive({
        let id = id.clone();
        move || editing_id.get().as_deref() == Some(id.as_str())
    });

    let name_cell = {
        let shown = supplier.name.clone();
        move || {
            if is_editing.get() {
                view! {
                    <input
                        type="text"
                        prop:value=move || edit_form.get().name
                        on:input=move |ev| edit_form.update(|f| f.name = event_target_value(&ev))
                    />
                }
                .into_any()
            } else {
                view! { <span>{shown.clone()}</span> }.into_any()
            }
        }
    };

    let email_cell = {
        let shown = supplier.email.clone();
        move || {
            if is_editing.get() {
                view! {
                    <input
                        type="text"
                        prop:value=move || edit_form.get().email
                        on:input=move |ev| edit_form.update(|f| f.email = event_target_value(&ev))
                    />
                }
                .into_any()
            } else {
                view! { <span>{shown.clone()}</span> }.into_any()
            }
        }
    };

    let phone_cell = {
        let shown = supplier.phone.clone();
        move || {
            if is_editing.get() {
                view! {
                    <input
                        type="text"
                        prop:value=move || edit_form.get().phone
                        on:input=move |ev| edit_form.update(|f| f.phone = event_target_value(&ev))
                    />
                }
                .into_any()
            } else {
                view! { <span>{shown.clone()}</span> }.into_any()
            }
        }
    };

    let category_cell = {
        let shown = supplier.category.clone();
        move || {
            if is_editing.get() {
                view! {
                    <input
                        type="text"
                        prop:value=move || edit_form.get().category
                        on:input=move |ev| edit_form.update(|f| f.category = event_target_value(&ev))
                    />
                }
                .into_any()
            } else {
                view! { <span>{shown.clone()}</span> }.into_any()
            }
        }
    };

    let actions = {
        let id = id.clone();
        let snapshot = SupplierDto::from(&supplier);
        move || {
            if is_editing.get() {
                let save_id = id.clone();
                view! {
                    <button class="button button--primary" on:click=move |_| on_save.run(save_id.clone())>
                        "Save"
                    </button>
                    <button class="button button--secondary" on:click=move |_| set_editing_id.set(None)>
                        "Cancel"
                    </button>
                }
                .into_any()
            } else {
                let edit_id = id.clone();
                let edit_snapshot = snapshot.clone();
                let delete_id = id.clone();
                view! {
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            edit_form.set(edit_snapshot.clone());
                            set_editing_id.set(Some(edit_id.clone()));
                        }
                    >
                        "Edit"
                    </button>
                    <button class="button button--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                        "Delete"
                    </button>
                }
                .into_any()
            }
        }
    };

    view! {
        <tr class="table__row">
            <td class="table__cell">{name_cell}</td>
            <td class="table__cell">{email_cell}</td>
            <td class="table__cell">{phone_cell}</td>
            <td class="table__cell">{category_cell}</td>
            <td class="table__cell table__cell--actions">{actions}</td>
        </tr>
    }
}
