//! Shared API-client constructor for all platforms.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate
//! [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via
//!   [`store::LocalTokens`]
//! - **Native** (tests, desktop shells): a process-wide
//!   [`store::MemoryTokens`]

use api::{ApiClient, ApiConfig};
use store::TokenStore;

/// Create a client against the configured backend, sharing the platform's
/// token storage. Cheap to call per screen; the token store is the only
/// state that must be shared, and it is.
pub fn make_client() -> ApiClient<impl TokenStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        ApiClient::new(ApiConfig::resolve(), store::LocalTokens::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        ApiClient::new(ApiConfig::resolve(), native_tokens())
    }
}

/// One shared in-memory store per process, so a token set at login is seen
/// by every later client on native builds too.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn native_tokens() -> store::MemoryTokens {
    use std::sync::OnceLock;
    static TOKENS: OnceLock<store::MemoryTokens> = OnceLock::new();
    TOKENS.get_or_init(store::MemoryTokens::new).clone()
}
