//! Explicit session context.
//!
//! The token lives in one session object provided at the app root and
//! injected into screens via [`use_session`], with a clear lifecycle:
//! [`init_session`] on login, [`teardown_session`] on logout. Screens never
//! read browser storage directly; storage is only the persistence layer for
//! restoring a session on reload.

use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub token: Option<String>,
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    // Restore a previous session from localStorage on mount
    let (session, set_session) = signal(SessionState {
        token: storage::get_token(),
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session =
        use_context::<ReadSignal<SessionState>>().expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Initialize the session after a successful login.
pub fn init_session(set_session: WriteSignal<SessionState>, token: String) {
    storage::save_token(&token);
    set_session.set(SessionState { token: Some(token) });
}

/// Tear the session down on logout.
pub fn teardown_session(set_session: WriteSignal<SessionState>) {
    storage::clear_token();
    set_session.set(SessionState::default());
}
