use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry;
use crate::shared::icons::icon;

/// Center column: tab strip plus the active screen.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-center">
            <div class="tab-strip">
                {move || ctx.opened.get().into_iter().map(|tab| {
                    let key = tab.key.clone();
                    let key_for_activate = key.clone();
                    let key_for_close = key.clone();
                    let is_active = ctx
                        .active
                        .get()
                        .map(|k| k == key)
                        .unwrap_or(false);
                    view! {
                        <div
                            class=if is_active { "tab-strip__tab tab-strip__tab--active" } else { "tab-strip__tab" }
                            on:click=move |_| ctx.activate_tab(&key_for_activate)
                        >
                            <span class="tab-strip__title">{tab.title.clone()}</span>
                            <button
                                class="tab-strip__close"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.close_tab(&key_for_close);
                                }
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="tab-content">
                {move || match ctx.active.get() {
                    Some(key) => registry::resolve(&key),
                    None => view! {
                        <div class="page">
                            <p class="page__hint">"Select a screen from the sidebar."</p>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
