pub mod sidebar;

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

/// Left column wrapper. Collapses when the sidebar is toggled off.
#[component]
pub fn Left(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <aside class=move || {
            if ctx.left_open.get() {
                "app-left"
            } else {
                "app-left app-left--collapsed"
            }
        }>
            {children()}
        </aside>
    }
}
