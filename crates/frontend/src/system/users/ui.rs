use contracts::system::auth::RegisteredUser;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::shared::components::message_box::ErrorBox;
use crate::system::auth::context::use_session;

/// Registered wholesale buyers screen.
#[component]
pub fn BuyersList() -> impl IntoView {
    let (session, _) = use_session();

    let (users, set_users) = signal::<Vec<RegisteredUser>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        let token = session.get_untracked().token.unwrap_or_default();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_users(&token).await {
                Ok(list) => {
                    set_users.set(list);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Error fetching users: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Registered Users"</h1>
                </div>
            </div>

            <ErrorBox message=Signal::derive(move || error.get()) />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__hint">"Loading users..."</p> }
            >
                <Show
                    when=move || !users.get().is_empty()
                    fallback=|| view! { <p class="page__hint">"No users found."</p> }
                >
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Name"</th>
                                    <th class="table__header-cell">"Email"</th>
                                    <th class="table__header-cell">"Business"</th>
                                    <th class="table__header-cell">"Location"</th>
                                    <th class="table__header-cell">"Contact"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || users.get().into_iter().map(|user| view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{user.name}</td>
                                        <td class="table__cell">{user.email}</td>
                                        <td class="table__cell">{user.business_name}</td>
                                        <td class="table__cell">{user.location}</td>
                                        <td class="table__cell">{user.contact}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
