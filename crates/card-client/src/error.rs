//! Client error types

use card_core::DomainError;
use thiserror::Error;

/// Errors raised while talking to the backend
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned HTTP {0}")]
    Status(u16),

    #[error("Invalid JSON in backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Malformed JSONP response: {0}")]
    Jsonp(String),
}

impl ClientError {
    /// Check if the failure happened before a response was read
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status(_))
    }
}

impl From<ClientError> for DomainError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Decode(_) | ClientError::Jsonp(_) => Self::Decode(err.to_string()),
            ClientError::Transport(_) | ClientError::Status(_) => Self::Backend(err.to_string()),
            ClientError::Build(_) => Self::InternalError(err.to_string()),
        }
    }
}
