use std::sync::{Arc, Mutex};

use crate::TokenStore;

/// In-memory token store for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokens {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokens {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_visible_to_get() {
        let tokens = MemoryTokens::new();
        assert_eq!(tokens.get(), None);

        tokens.set("abc123");
        assert_eq!(tokens.get(), Some("abc123".to_string()));
    }

    #[test]
    fn test_set_replaces_previous_token() {
        let tokens = MemoryTokens::new();
        tokens.set("first");
        tokens.set("second");
        assert_eq!(tokens.get(), Some("second".to_string()));
    }

    #[test]
    fn test_clear_removes_token() {
        let tokens = MemoryTokens::new();
        tokens.set("abc123");
        tokens.clear();
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn test_clear_on_empty_store_is_harmless() {
        let tokens = MemoryTokens::new();
        tokens.clear();
        tokens.clear();
        assert_eq!(tokens.get(), None);
    }

    #[test]
    fn test_clones_share_storage() {
        let tokens = MemoryTokens::new();
        let other = tokens.clone();
        tokens.set("shared");
        assert_eq!(other.get(), Some("shared".to_string()));
    }
}
