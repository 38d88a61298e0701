//! Session context and hooks for the UI.
//!
//! One [`Session`] handle per running app, provided by [`SessionProvider`].
//! The handle is the only place session state is mutated: `finish_login`,
//! `sign_out`, and the startup bootstrap inside the provider. Screens and
//! the router observe it through [`use_session`].

use api::models::User;
use api::push::ConnState;
use api::session::{self, SessionState};
use dioxus::prelude::*;

use crate::client::make_client;
use crate::notifier::{close_notifier, open_notifier};
use crate::toast::{push_toast, use_toasts, ToastLevel, ToastStack};

/// Handle to the process-wide session: observable state plus its lifecycle
/// mutators. Copy-cheap; grab it with [`use_session`].
#[derive(Clone, Copy)]
pub struct Session {
    state: Signal<SessionState>,
    conn: Signal<ConnState>,
    toasts: Signal<ToastStack>,
}

impl Session {
    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// True until the startup bootstrap has resolved.
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    /// Finish a successful login/registration: persist the token, mark the
    /// session signed in, and open the push channel.
    pub fn finish_login(&mut self, token: &str, user: User) {
        let client = make_client();
        let state = session::complete_login(client.tokens(), token, user);
        if let Some(user) = &state.user {
            open_notifier(&user.id, self.conn, self.toasts);
        }
        self.state.set(state);
    }

    /// Tear the session down: clear the token, close the push channel, and
    /// mark the session signed out. Safe to call repeatedly.
    pub fn sign_out(&mut self) {
        let client = make_client();
        close_notifier(self.conn);
        self.state.set(session::logout(client.tokens()));
    }
}

/// Get the current session handle.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that owns session state and runs the startup
/// bootstrap. Must sit inside [`crate::Toaster`] so alerts have somewhere
/// to go; wrap the router with it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);
    let conn = use_signal(ConnState::default);
    let toasts = use_toasts();

    use_context_provider(|| conn);
    use_context_provider(|| Session {
        state,
        conn,
        toasts,
    });

    // Validate any stored token once, before protected routes render.
    let _ = use_resource(move || async move {
        let client = make_client();
        let mut toasts = toasts;

        // A federated login lands back here with a session id in the URL
        // fragment; exchange it before consulting stored tokens.
        if let Some(session_id) = take_login_fragment() {
            match client.google_callback(&session_id).await {
                Ok(auth) => {
                    let next =
                        session::complete_login(client.tokens(), &auth.token, auth.user.clone());
                    open_notifier(&auth.user.id, conn, toasts);
                    push_toast(&mut toasts, ToastLevel::Success, "Welcome to Social X!");
                    state.set(next);
                    return;
                }
                Err(err) => {
                    tracing::error!("federated login exchange failed: {err}");
                    push_toast(&mut toasts, ToastLevel::Error, "Authentication failed");
                }
            }
        }

        let next = session::bootstrap(client.tokens(), &client).await;
        if let Some(user) = &next.user {
            open_notifier(&user.id, conn, toasts);
        }
        state.set(next);
    });

    rsx! {
        {children}
    }
}

/// Pull a federated-login session id out of the URL fragment, clearing the
/// fragment so a reload doesn't replay the exchange.
fn take_login_fragment() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let hash = window.location().hash().ok()?;
        let (_, rest) = hash.split_once("session_id=")?;
        let session_id = rest.split('&').next()?.to_string();
        if session_id.is_empty() {
            return None;
        }
        let _ = window.location().set_hash("");
        Some(session_id)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
