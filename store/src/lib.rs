//! Client-side credential persistence for the app.
//!
//! Exposes the [`TokenStore`] trait — a tiny seam over wherever the bearer
//! token lives — with two implementations:
//! - [`MemoryTokens`]: in-process storage for native builds and tests
//! - [`LocalTokens`]: browser `localStorage` (web platform, `web` feature)
//!
//! The token is the only durable client-side state the app keeps. Clearing
//! it is the only invalidation mechanism; expiry is entirely server-driven.

mod memory;
pub use memory::MemoryTokens;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalTokens;

/// Fixed storage key the bearer token is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Storage for the single bearer token of the current session.
///
/// Writes must be visible to every subsequent `get` within the process.
/// Implementations swallow storage failures: a broken backing store degrades
/// to "no token", never to a crash.
pub trait TokenStore: Clone {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn set(&self, token: &str);
    /// Remove the stored token. A no-op when nothing is stored.
    fn clear(&self);
}
