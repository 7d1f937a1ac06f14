use leptos::prelude::*;
use thaw::*;

/// Inline error bar shown under a page header when a request fails.
/// Renders nothing while the signal is empty.
#[component]
pub fn ErrorBox(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|e| view! {
            <div class="message-box">
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            </div>
        })}
    }
}

/// Transient success notice. The owning screen clears the signal after a
/// fixed delay; this component only renders it.
#[component]
pub fn SuccessNotice(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|m| view! {
            <div class="message-box">
                <MessageBar intent=MessageBarIntent::Success>{m}</MessageBar>
            </div>
        })}
    }
}
