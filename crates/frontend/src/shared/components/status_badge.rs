use leptos::prelude::*;

/// Small colored pill for status cells (stock bands, return/refund statuses,
/// order statuses).
#[component]
pub fn StatusBadge(
    #[prop(into)] label: Signal<String>,
    /// CSS accent suffix: "success", "warning", "error", "info", "neutral"
    #[prop(into)] accent: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <span class=move || format!("status-badge status-badge--{}", accent.get())>
            {move || label.get()}
        </span>
    }
}
