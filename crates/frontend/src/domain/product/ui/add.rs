use contracts::domain::product::{Category, ProductDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::super::api;
use crate::shared::components::message_box::{ErrorBox, SuccessNotice};

/// New product form.
#[component]
pub fn AddProduct() -> impl IntoView {
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let form = RwSignal::new(ProductDto::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    spawn_local(async move {
        match api::fetch_categories().await {
            Ok(list) => set_categories.set(list),
            Err(e) => log::error!("Error fetching categories: {}", e),
        }
    });

    let handle_submit = move |_| {
        let dto = form.get_untracked();
        if dto.name.trim().is_empty() || dto.category.trim().is_empty() {
            set_error.set(Some("Product name and category are required".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        set_notice.set(None);
        spawn_local(async move {
            match api::add_product(&dto).await {
                Ok(()) => {
                    set_notice.set(Some("Product added successfully!".to_string()));
                    form.set(ProductDto::default());
                }
                Err(e) => {
                    log::error!("Error adding product: {}", e);
                    set_error.set(Some("Error adding product.".to_string()));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page page--narrow">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Add New Product"</h1>
                </div>
            </div>

            <SuccessNotice message=Signal::derive(move || notice.get()) />
            <ErrorBox message=Signal::derive(move || error.get()) />

            <div class="details-form">
                <div class="form-group">
                    <label for="product-name">"Name"</label>
                    <input
                        type="text"
                        id="product-name"
                        placeholder="Product name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-category">"Category"</label>
                    <select
                        id="product-category"
                        prop:value=move || form.get().category
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value="">"Select Category"</option>
                        {move || categories.get().into_iter().map(|cat| view! {
                            <option value=cat.id.clone()>{cat.name.clone()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="product-description">"Description"</label>
                    <textarea
                        id="product-description"
                        rows="4"
                        placeholder="Short product description"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_submit
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Add Product" }}
                </Button>
            </div>
        </div>
    }
}
