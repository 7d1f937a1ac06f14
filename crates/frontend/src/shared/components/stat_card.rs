use crate::shared::icons::icon;
use leptos::prelude::*;

/// Single summary tile used across dashboards.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Already-formatted value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// CSS accent suffix: "success", "warning", "error" or "" for neutral
    #[prop(optional, into)]
    accent: String,
) -> impl IntoView {
    let card_class = if accent.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{}", accent)
    };

    let formatted = move || value.get().unwrap_or_else(|| "—".to_string());

    view! {
        <div class=card_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
