use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{teardown_session, use_session};

/// Top bar: sidebar toggle, brand, logout.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (_, set_session) = use_session();

    view! {
        <header class="top-header">
            <button
                class="top-header__toggle"
                title="Toggle sidebar"
                on:click=move |_| ctx.toggle_left()
            >
                {icon("menu")}
            </button>
            <div class="top-header__brand">"INVEXA"</div>
            <div class="top-header__spacer"></div>
            <button
                class="top-header__logout"
                title="Log out"
                on:click=move |_| teardown_session(set_session)
            >
                {icon("logout")}
                " Logout"
            </button>
        </header>
    }
}
