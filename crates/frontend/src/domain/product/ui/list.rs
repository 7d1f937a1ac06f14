use contracts::domain::product::{Category, Product, ProductDto};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::super::api;
use crate::shared::components::message_box::{ErrorBox, SuccessNotice};

/// Product inventory: searchable card grid with inline editing.
#[component]
pub fn ProductList() -> impl IntoView {
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);

    // Inline edit state lives outside the product list so typing does not
    // re-render the grid.
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let form = RwSignal::new(ProductDto::default());

    let (search_term, set_search_term) = signal(String::new());
    let (filter_category, set_filter_category) = signal(String::new());

    let fetch_products = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(list) => set_products.set(list),
                Err(e) => {
                    log::error!("Error fetching products: {}", e);
                    set_error.set(Some("Failed to load products".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    fetch_products();
    spawn_local(async move {
        match api::fetch_categories().await {
            Ok(list) => set_categories.set(list),
            Err(e) => {
                log::error!("Error fetching categories: {}", e);
                set_error.set(Some("Failed to load categories".to_string()));
            }
        }
    });

    let show_notice = move |text: &'static str| {
        set_notice.set(Some(text.to_string()));
        spawn_local(async move {
            TimeoutFuture::new(3_000).await;
            set_notice.set(None);
        });
    };

    let on_save = Callback::new(move |id: String| {
        let dto = form.get_untracked();
        spawn_local(async move {
            match api::update_product(&id, &dto).await {
                Ok(()) => {
                    show_notice("Product updated successfully");
                    set_editing_id.set(None);
                    fetch_products();
                }
                Err(e) => {
                    log::error!("Update error: {}", e);
                    set_error.set(Some("Failed to update product".to_string()));
                }
            }
        });
    });

    let on_delete = Callback::new(move |(id, name): (String, String)| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!("Are you sure you want to delete \"{}\"?", name))
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(()) => {
                    set_products.update(|list| list.retain(|p| p.id != id));
                    show_notice("Product deleted successfully");
                }
                Err(e) => {
                    log::error!("Delete error: {}", e);
                    set_error.set(Some("Failed to delete product".to_string()));
                }
            }
        });
    });

    let filtered = move || {
        let term = search_term.get().to_lowercase();
        let cat = filter_category.get();
        products
            .get()
            .into_iter()
            .filter(|p| {
                let matches_search = term.is_empty()
                    || p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term);
                let matches_category =
                    cat.is_empty() || p.category_id().map(|c| c == cat).unwrap_or(false);
                matches_search && matches_category
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Product Inventory"</h1>
                </div>
            </div>

            <SuccessNotice message=Signal::derive(move || notice.get()) />
            <ErrorBox message=Signal::derive(move || error.get()) />

            <div class="filter-bar">
                <input
                    type="text"
                    class="filter-bar__search"
                    placeholder="Search products..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                />
                <select
                    class="filter-bar__select"
                    on:change=move |ev| set_filter_category.set(event_target_value(&ev))
                >
                    <option value="">"All Categories"</option>
                    {move || categories.get().into_iter().map(|cat| view! {
                        <option value=cat.id.clone()>{cat.name.clone()}</option>
                    }).collect_view()}
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__hint">"Loading products..."</p> }
            >
                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| view! { <p class="page__hint">"No products found"</p> }
                >
                    <div class="card-grid">
                        {move || filtered().into_iter().map(|product| view! {
                            <ProductCard
                                product=product
                                categories=categories
                                editing_id=editing_id
                                set_editing_id=set_editing_id
                                form=form
                                on_save=on_save
                                on_delete=on_delete
                            />
                        }).collect_view()}
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn ProductCard(
    product: Product,
    categories: ReadSignal<Vec<Category>>,
    editing_id: ReadSignal<Option<String>>,
    set_editing_id: WriteSignal<Option<String>>,
    form: RwSignal<ProductDto>,
    on_save: Callback<String>,
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    let id = product.id.clone();
    let name = product.name.clone();
    let description = product.description.clone();
    let category_id = product.category_id().unwrap_or_default().to_string();
    let category_badge = product.category_name().to_string();
    let image = product.images.first().cloned();

    let is_editing = Signal::derive({
        let id = id.clone();
        move || editing_id.get().as_deref() == Some(id.as_str())
    });

    let body = {
        let name = name.clone();
        let description = description.clone();
        move || {
            if is_editing.get() {
                view! {
                    <div class="product-card__body">
                        <div class="form-group">
                            <label>"Name"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().name
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Category"</label>
                            <select
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
                            <label>"Description"</label>
                            <textarea
                                rows="3"
                                prop:value=move || form.get().description
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            />
                        </div>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class="product-card__body">
                        <h2 class="card__title">{name.clone()}</h2>
                        <p class="card__subtitle">{description.clone()}</p>
                    </div>
                }
                .into_any()
            }
        }
    };

    let actions = {
        let id = id.clone();
        let name = name.clone();
        let description = description.clone();
        let category_id = category_id.clone();
        move || {
            if is_editing.get() {
                let save_id = id.clone();
                view! {
                    <button
                        class="button button--primary"
                        on:click=move |_| on_save.run(save_id.clone())
                    >
                        "Save"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| set_editing_id.set(None)
                    >
                        "Cancel"
                    </button>
                }
                .into_any()
            } else {
                let edit_id = id.clone();
                let edit_name = name.clone();
                let edit_description = description.clone();
                let edit_category = category_id.clone();
                let delete_id = id.clone();
                let delete_name = name.clone();
                view! {
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            form.set(ProductDto {
                                name: edit_name.clone(),
                                description: edit_description.clone(),
                                category: edit_category.clone(),
                            });
                            set_editing_id.set(Some(edit_id.clone()));
                        }
                    >
                        "Edit"
                    </button>
                    <button
                        class="button button--danger"
                        on:click=move |_| on_delete.run((delete_id.clone(), delete_name.clone()))
                    >
                        "Delete"
                    </button>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="card product-card">
            <div class="product-card__media">
                {match image {
                    Some(src) => view! {
                        <img class="product-card__image" src=src alt=name.clone() />
                    }.into_any(),
                    None => view! {
                        <div class="product-card__placeholder">"No Image"</div>
                    }.into_any(),
                }}
                <span class="product-card__badge">{category_badge}</span>
            </div>
            {body}
            <div class="product-card__actions">
                {actions}
            </div>
        </div>
    }
}
