//! Backend address configuration, resolved once at startup.
//!
//! A single origin serves both the REST API (under `/api`) and the push
//! channel (under `/ws`). The origin comes from the `BACKEND_URL` environment
//! variable at build time, falling back to a local development default.

const DEFAULT_BACKEND: &str = "http://localhost:8000";

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    backend: String,
}

impl ApiConfig {
    /// Resolve the backend origin from the build environment.
    pub fn resolve() -> Self {
        Self::with_backend(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND))
    }

    /// Use an explicit backend origin (scheme + host, no trailing slash).
    pub fn with_backend(backend: &str) -> Self {
        Self {
            backend: backend.trim_end_matches('/').to_string(),
        }
    }

    /// Base address of the REST API.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend)
    }

    /// Push-channel address for an authenticated user.
    ///
    /// Same origin as the REST API with the scheme switched to WebSocket
    /// (`http` → `ws`, `https` → `wss`).
    pub fn push_url(&self, user_id: &str) -> String {
        let origin = if let Some(rest) = self.backend.strip_prefix("https") {
            format!("wss{rest}")
        } else if let Some(rest) = self.backend.strip_prefix("http") {
            format!("ws{rest}")
        } else {
            self.backend.clone()
        };
        format!("{origin}/ws/{user_id}")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_appends_prefix() {
        let config = ApiConfig::with_backend("http://localhost:8000");
        assert_eq!(config.api_base(), "http://localhost:8000/api");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::with_backend("https://social.example.com/");
        assert_eq!(config.api_base(), "https://social.example.com/api");
    }

    #[test]
    fn test_push_url_plain_http() {
        let config = ApiConfig::with_backend("http://localhost:8000");
        assert_eq!(config.push_url("u1"), "ws://localhost:8000/ws/u1");
    }

    #[test]
    fn test_push_url_https() {
        let config = ApiConfig::with_backend("https://social.example.com");
        assert_eq!(config.push_url("u1"), "wss://social.example.com/ws/u1");
    }
}
