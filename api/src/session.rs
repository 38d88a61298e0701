//! Session lifecycle: the process-wide authentication state and its three
//! mutators.
//!
//! The state itself is a plain value ([`SessionState`]); the UI layer owns
//! the single live copy inside a Dioxus signal and calls these functions to
//! produce the next state. `user` is `Some` exactly when a stored token has
//! been validated (or freshly issued) in this process lifetime.
//!
//! Every failure path degrades to signed-out. The "who am I" check does not
//! distinguish a network blip from a rejected token — both clear the stored
//! token and sign the user out, and the user re-authenticates.

use store::TokenStore;

use crate::error::ApiError;
use crate::models::User;

/// The current authentication state of the process.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True until the startup bootstrap has finished; protected routes wait
    /// on this before rendering or redirecting.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// The one backend call the session layer makes itself.
pub trait Identity {
    /// `GET /auth/me` — who does the stored token belong to?
    async fn me(&self) -> Result<User, ApiError>;
}

impl<T: TokenStore> Identity for crate::client::ApiClient<T> {
    async fn me(&self) -> Result<User, ApiError> {
        crate::client::ApiClient::me(self).await
    }
}

/// Validate any stored token against the backend. Runs once per process
/// lifetime, before any protected route renders.
///
/// - No stored token: signed out, without touching the backend.
/// - Token accepted: signed in as the returned user.
/// - Any failure: the token is cleared and the session is signed out.
pub async fn bootstrap<T: TokenStore, A: Identity>(tokens: &T, api: &A) -> SessionState {
    if tokens.get().is_none() {
        return SessionState::signed_out();
    }
    match api.me().await {
        Ok(user) => {
            tracing::info!(user = %user.id, "session restored from stored token");
            SessionState::signed_in(user)
        }
        Err(err) => {
            tracing::warn!("stored token rejected, signing out: {err}");
            tokens.clear();
            SessionState::signed_out()
        }
    }
}

/// Finish a successful login, registration, or federated-callback exchange.
pub fn complete_login<T: TokenStore>(tokens: &T, token: &str, user: User) -> SessionState {
    tokens.set(token);
    SessionState::signed_in(user)
}

/// Tear the session down. Safe to call repeatedly.
pub fn logout<T: TokenStore>(tokens: &T) -> SessionState {
    tokens.clear();
    SessionState::signed_out()
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use store::MemoryTokens;

    use super::*;

    /// Scripted `/auth/me` endpoint that counts how often it is hit.
    struct StubIdentity {
        result: RefCell<Option<Result<User, ApiError>>>,
        calls: Cell<u32>,
    }

    impl StubIdentity {
        fn accepting(user: User) -> Self {
            Self {
                result: RefCell::new(Some(Ok(user))),
                calls: Cell::new(0),
            }
        }

        fn rejecting(err: ApiError) -> Self {
            Self {
                result: RefCell::new(Some(Err(err))),
                calls: Cell::new(0),
            }
        }
    }

    impl Identity for StubIdentity {
        async fn me(&self) -> Result<User, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.result.borrow_mut().take().unwrap()
        }
    }

    fn ann() -> User {
        User {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            name: "Ann".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_bootstrap_without_token_never_calls_backend() {
        let tokens = MemoryTokens::new();
        let api = StubIdentity::accepting(ann());

        let state = bootstrap(&tokens, &api).await;

        assert!(!state.is_authenticated());
        assert!(!state.loading);
        assert_eq!(api.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_bootstrap_with_accepted_token_signs_in() {
        let tokens = MemoryTokens::new();
        tokens.set("good-token");
        let api = StubIdentity::accepting(ann());

        let state = bootstrap(&tokens, &api).await;

        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Ann"));
        assert_eq!(api.calls.get(), 1);
        // The accepted token stays stored.
        assert_eq!(tokens.get(), Some("good-token".to_string()));
    }

    #[tokio::test]
    async fn test_bootstrap_with_rejected_token_clears_it() {
        let tokens = MemoryTokens::new();
        tokens.set("stale-token");
        let api = StubIdentity::rejecting(ApiError::Auth);

        let state = bootstrap(&tokens, &api).await;

        assert!(!state.is_authenticated());
        assert_eq!(tokens.get(), None);
    }

    #[tokio::test]
    async fn test_bootstrap_network_failure_also_signs_out() {
        // Deliberate conflation: a transport error during bootstrap is
        // treated exactly like a rejected token.
        let tokens = MemoryTokens::new();
        tokens.set("maybe-fine-token");
        let api = StubIdentity::rejecting(ApiError::Transport("offline".to_string()));

        let state = bootstrap(&tokens, &api).await;

        assert!(!state.is_authenticated());
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn test_login_then_logout_leaves_store_empty() {
        let tokens = MemoryTokens::new();

        let state = complete_login(&tokens, "fresh-token", ann());
        assert!(state.is_authenticated());
        assert_eq!(tokens.get(), Some("fresh-token".to_string()));

        let state = logout(&tokens);
        assert!(!state.is_authenticated());
        assert_eq!(tokens.get(), None);

        // Logging out twice is harmless.
        let state = logout(&tokens);
        assert!(!state.is_authenticated());
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn test_default_state_is_loading_and_unauthenticated() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
    }
}
