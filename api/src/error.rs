//! Error taxonomy for backend calls.
//!
//! Every [`ApiClient`](crate::client::ApiClient) method fails with exactly one
//! of these variants. Screens show [`ApiError`]'s `Display` output in a toast;
//! the session bootstrap treats every variant the same way (sign out).

use thiserror::Error;

/// A failed backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, DNS, fetch abort).
    #[error("network error: {0}")]
    Transport(String),

    /// The backend rejected the credentials or token (401/403).
    #[error("not authenticated")]
    Auth,

    /// The backend refused the request (other 4xx). `detail` is the backend's
    /// own message, suitable for showing to the user.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// The backend failed (5xx).
    #[error("server error (status {status})")]
    Server { status: u16 },

    /// The response body did not parse as the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            401 | 403 => Self::Auth,
            400..=499 => Self::Rejected { status, detail },
            _ => Self::Server { status },
        }
    }

    /// Whether this failure means the token or credentials were rejected.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(ApiError::from_status(401, String::new()).is_auth());
        assert!(ApiError::from_status(403, String::new()).is_auth());
        assert!(matches!(
            ApiError::from_status(400, "Email already registered".to_string()),
            ApiError::Rejected { status: 400, .. }
        ));
        assert!(matches!(
            ApiError::from_status(500, String::new()),
            ApiError::Server { status: 500 }
        ));
    }

    #[test]
    fn test_rejected_displays_backend_detail() {
        let err = ApiError::from_status(400, "Email already registered".to_string());
        assert_eq!(err.to_string(), "Email already registered");
    }
}
