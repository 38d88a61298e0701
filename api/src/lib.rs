//! # API crate — typed client for the Social X backend
//!
//! Everything the frontends need to talk to the remote HTTP backend lives
//! here: configuration, the request client, wire models, the session
//! lifecycle, and the push-channel event handling.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend base address, resolved once at startup |
//! | [`client`] | [`ApiClient`] — authenticated requests against every backend endpoint |
//! | [`models`] | Wire models (`User`, `FeedPost`, `Conversation`, ...) |
//! | [`session`] | Session lifecycle: `bootstrap` / `complete_login` / `logout` |
//! | [`push`] | Push-channel connection state machine and event parsing |
//! | [`error`] | [`ApiError`] — the error taxonomy every call surfaces |
//!
//! The client attaches the stored bearer token (see the `store` crate) to
//! every outgoing request. Each call is a single attempt: no retries, no
//! caching, no timeouts — failures surface synchronously to the calling
//! screen, which turns them into a toast and leaves prior UI state intact.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod push;
pub mod session;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::User;
pub use session::SessionState;
