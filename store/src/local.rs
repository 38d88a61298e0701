//! # Browser `localStorage` token store — web platform
//!
//! [`LocalTokens`] is the [`TokenStore`] implementation used on the **web
//! platform**. It persists the bearer token under [`crate::TOKEN_KEY`] in the
//! origin-scoped `localStorage` of the browser.
//!
//! ## Connection management
//!
//! `LocalTokens` is a zero-size struct (`Clone`-friendly) that looks up the
//! storage object on every operation; the browser hands back the same
//! `Storage` instance each time, so there is nothing worth caching.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! "never logged in" rather than crashing the client.

use crate::{TokenStore, TOKEN_KEY};

/// `localStorage`-backed token store for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalTokens;

impl LocalTokens {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalTokens {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
