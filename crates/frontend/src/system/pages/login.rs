use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::message_box::ErrorBox;
use crate::system::auth::api;
use crate::system::auth::context::{init_session, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_session) = use_session();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let handle_submit = move |_| {
        if submitting.get() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let email_value = email.get();
        let password_value = password.get();
        spawn_local(async move {
            match api::admin_login(email_value, password_value).await {
                Ok(token) => {
                    submitting.set(false);
                    init_session(set_session, token);
                }
                Err(e) => {
                    log::error!("Admin login failed: {}", e);
                    submitting.set(false);
                    error.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="login-screen">
            <div class="login-card">
                <h1 class="login-card__title">"Admin Panel"</h1>

                <ErrorBox message=Signal::derive(move || error.get()) />

                <div class="form-group">
                    <label for="login-email">"Email"</label>
                    <input
                        type="email"
                        id="login-email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="login-password">"Password"</label>
                    <input
                        type="password"
                        id="login-password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                handle_submit(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| handle_submit(())
                    disabled=Signal::derive(move || submitting.get())
                >
                    {move || if submitting.get() { "Signing in..." } else { "Login" }}
                </Button>
            </div>
        </div>
    }
}
