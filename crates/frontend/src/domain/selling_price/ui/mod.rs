use leptos::prelude::*;
use thaw::*;

use super::store::SellingPriceStore;
use crate::shared::components::message_box::{ErrorBox, SuccessNotice};
use crate::shared::format::format_quantity;

/// Selling price and quantity discount editor.
///
/// The card list is keyed on record COUNT (a memo), not on record content:
/// keystrokes mutate the records signal on every input event, and rebuilding
/// the list each time would throw away input focus. Field values are read
/// reactively inside each card instead.
#[component]
pub fn PriceManager() -> impl IntoView {
    let store = SellingPriceStore::new();
    store.load();

    let record_count = Memo::new(move |_| store.records.with(|list| list.len()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Manage Selling Prices"</h1>
                </div>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| store.initialize_missing()
                    >
                        "Initialize Missing Prices"
                    </Button>
                </div>
            </div>

            <SuccessNotice message=Signal::derive(move || store.notice.get()) />
            <ErrorBox message=Signal::derive(move || store.error.get()) />

            <Show
                when=move || !store.loading.get()
                fallback=|| view! { <p class="page__hint">"Loading selling prices..."</p> }
            >
                <Show
                    when=move || { record_count.get() > 0 }
                    fallback=|| view! { <p class="page__hint">"No products found."</p> }
                >
                    {move || (0..record_count.get()).map(|i| {
                        view! { <PriceCard store=store index=i /> }
                    }).collect_view()}
                </Show>
            </Show>
        </div>
    }
}

/// One product's price card: base price, stock hint, and the discount tiers.
#[component]
fn PriceCard(store: SellingPriceStore, index: usize) -> impl IntoView {
    let product_name = move || {
        store
            .records
            .with(|list| list.get(index).map(|r| r.product_name().to_string()))
            .unwrap_or_default()
    };
    let stock_hint = move || {
        store
            .records
            .with(|list| list.get(index).map(|r| r.total_current_quantity))
            .map(|q| format!("Stock: {} kg/units", format_quantity(q)))
            .unwrap_or_default()
    };
    let base_price = move || {
        store
            .records
            .with(|list| list.get(index).map(|r| r.base_price).unwrap_or(0.0))
            .to_string()
    };
    let tier_count = Memo::new(move |_| {
        store.records.with(|list| {
            list.get(index)
                .map(|r| r.quantity_discounts.len())
                .unwrap_or(0)
        })
    });

    view! {
        <div class="card price-card">
            <h3 class="card__title">{product_name}</h3>
            <p class="card__subtitle">{stock_hint}</p>

            <div class="price-card__controls">
                <label class="price-card__label">"Base Price Rs.:"</label>
                <input
                    type="number"
                    class="price-card__base-input"
                    min="0"
                    prop:value=base_price
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        store.update_record(index, |r| r.set_base_price(&raw));
                    }
                />

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| store.update_record(index, |r| r.add_tier())
                >
                    "+ Add Discount"
                </Button>

                <Button
                    appearance=ButtonAppearance::Primary
                    size=ButtonSize::Small
                    on_click=move |_| store.save(index)
                >
                    "Save"
                </Button>
            </div>

            <Show when=move || { tier_count.get() > 0 }>
                <div class="price-card__tiers">
                    <p class="price-card__tiers-title">"Discounts:"</p>
                    {move || (0..tier_count.get()).map(|j| {
                        view! { <TierRow store=store index=index tier_index=j /> }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// One discount tier row: minimum quantity, percentage, remove.
#[component]
fn TierRow(store: SellingPriceStore, index: usize, tier_index: usize) -> impl IntoView {
    let min_quantity = move || {
        store
            .records
            .with(|list| {
                list.get(index)
                    .and_then(|r| r.quantity_discounts.get(tier_index))
                    .map(|t| t.min_quantity)
            })
            .unwrap_or(1)
            .to_string()
    };
    let discount_percent = move || {
        store
            .records
            .with(|list| {
                list.get(index)
                    .and_then(|r| r.quantity_discounts.get(tier_index))
                    .map(|t| t.discount_percent)
            })
            .unwrap_or(0.0)
            .to_string()
    };

    view! {
        <div class="price-card__tier-row">
            <input
                type="number"
                class="price-card__tier-qty"
                min="1"
                prop:value=min_quantity
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    store.update_record(index, |r| r.set_tier_min_quantity(tier_index, &raw));
                }
            />
            <span class="price-card__tier-sep">"kg →"</span>
            <input
                type="number"
                class="price-card__tier-pct"
                min="0"
                max="100"
                prop:value=discount_percent
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    store.update_record(index, |r| r.set_tier_discount_percent(tier_index, &raw));
                }
            />
            <span class="price-card__tier-sep">"%"</span>
            <button
                class="price-card__tier-remove"
                title="Remove discount"
                on:click=move |_| store.update_record(index, |r| r.remove_tier(tier_index))
            >
                "✕"
            </button>
        </div>
    }
}
