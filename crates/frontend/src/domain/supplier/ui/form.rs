use contracts::domain::supplier::{SupplierDto, SUPPLIER_CATEGORIES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::api;
use crate::shared::components::message_box::{ErrorBox, SuccessNotice};

/// New supplier form. Name, email and phone are required; category comes
/// from a fixed list.
#[component]
pub fn SupplierForm() -> impl IntoView {
    let form = RwSignal::new(SupplierDto::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let handle_submit = move |_| {
        let dto = form.get_untracked();
        if !dto.is_valid() {
            set_error.set(Some("Name, email and phone are required".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        set_notice.set(None);
        spawn_local(async move {
            match api::add_supplier(&dto).await {
                Ok(()) => {
                    set_notice.set(Some("Supplier added successfully!".to_string()));
                    form.set(SupplierDto::default());
                }
                Err(e) => {
                    log::error!("Submission error: {}", e);
                    set_error.set(Some(format!("Error: {}", e)));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Add New Supplier"</h1>
                </div>
            </div>

            <SuccessNotice message=Signal::derive(move || notice.get()) />
            <ErrorBox message=Signal::derive(move || error.get()) />

            <div class="details-form">
                <div class="form-group">
                    <label for="supplier-name">"Name"</label>
                    <input
                        type="text"
                        id="supplier-name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="supplier-email">"Email"</label>
                    <input
                        type="email"
                        id="supplier-email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="supplier-phone">"Phone"</label>
                    <input
                        type="text"
                        id="supplier-phone"
                        prop:value=move || form.get().phone
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="supplier-category">"Category"</label>
                    <select
                        id="supplier-category"
                        prop:value=move || form.get().category
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        {SUPPLIER_CATEGORIES.iter().map(|cat| view! {
                            <option value=*cat>{*cat}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="supplier-notes">"Notes"</label>
                    <textarea
                        id="supplier-notes"
                        rows="3"
                        prop:value=move || form.get().notes
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_submit
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Add Supplier" }}
                </Button>
            </div>
        </div>
    }
}
