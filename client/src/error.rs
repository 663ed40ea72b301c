//! Client error types.

use mever_types::SelectionError;
use thiserror::Error;

/// Shown when the service rejects a request without a usable message.
pub const FALLBACK_MESSAGE: &str = "Verification failed.";

/// Shown when the request never completed or the reply was unreadable.
pub const NETWORK_MESSAGE: &str = "Network or server error.";

/// The request could not complete.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

/// Outcome of a failed verification attempt.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum VerifyError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] SelectionError),

    #[error("service returned HTTP {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid response from service: {0}")]
    InvalidResponse(String),
}

impl VerifyError {
    /// The text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(e) => e.to_string(),
            Self::Server {
                message: Some(m), ..
            } => m.clone(),
            Self::Server { message: None, .. } => FALLBACK_MESSAGE.to_string(),
            Self::Transport(_) | Self::InvalidResponse(_) => NETWORK_MESSAGE.to_string(),
        }
    }
}

/// Construction and configuration failures.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("config error: {0}")]
    Config(String),

    #[error("failed to create HTTP client: {0}")]
    Http(String),
}
