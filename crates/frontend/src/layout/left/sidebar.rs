use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::registry::tab_title;
use crate::shared::icons::icon;

struct NavEntry {
    key: &'static str,
    icon: &'static str,
}

struct NavSection {
    title: &'static str,
    entries: &'static [NavEntry],
}

const SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Dashboards",
        entries: &[
            NavEntry { key: "home", icon: "dashboard" },
            NavEntry { key: "stock", icon: "inventory" },
            NavEntry { key: "finance", icon: "chart" },
            NavEntry { key: "transactions", icon: "transactions" },
            NavEntry { key: "returns_dashboard", icon: "returns" },
        ],
    },
    NavSection {
        title: "Catalog",
        entries: &[
            NavEntry { key: "inventory", icon: "products" },
            NavEntry { key: "add_product", icon: "plus" },
        ],
    },
    NavSection {
        title: "Purchasing",
        entries: &[
            NavEntry { key: "create_request", icon: "purchases" },
            NavEntry { key: "receive_delivery", icon: "check" },
            NavEntry { key: "suppliers", icon: "suppliers" },
            NavEntry { key: "add_supplier", icon: "plus" },
        ],
    },
    NavSection {
        title: "Sales",
        entries: &[
            NavEntry { key: "orders", icon: "orders" },
            NavEntry { key: "buyers", icon: "customers" },
            NavEntry { key: "returns", icon: "returns" },
        ],
    },
    NavSection {
        title: "Pricing",
        entries: &[
            NavEntry { key: "price_manager", icon: "money" },
        ],
    },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="sidebar">
            {SECTIONS.iter().map(|section| view! {
                <div class="sidebar__section">
                    <div class="sidebar__section-title">{section.title}</div>
                    {section.entries.iter().map(|entry| {
                        let key = entry.key;
                        let title = tab_title(key);
                        let label = title.clone();
                        view! {
                            <button
                                class=move || {
                                    let active = ctx
                                        .active
                                        .get()
                                        .map(|k| k == key)
                                        .unwrap_or(false);
                                    if active {
                                        "sidebar__item sidebar__item--active"
                                    } else {
                                        "sidebar__item"
                                    }
                                }
                                on:click=move |_| ctx.open_tab(key, &title)
                            >
                                {icon(entry.icon)}
                                <span class="sidebar__item-label">{label}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
            }).collect_view()}
        </nav>
    }
}
