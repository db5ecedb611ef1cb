//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("No member token was supplied")]
    MissingToken,

    #[error("Invalid member token: {0}")]
    InvalidToken(String),

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found")]
    MemberNotFound,

    // =========================================================================
    // Backend Errors (wrapped)
    // =========================================================================
    #[error("Backend request failed: {0}")]
    Backend(String),

    #[error("Backend response could not be decoded: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingToken => "MISSING_TOKEN",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::MemberNotFound => "MEMBER_NOT_FOUND",
            Self::Backend(_) | Self::Decode(_) => "BACKEND_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::MemberNotFound)
    }

    /// Check if this is caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingToken | Self::InvalidToken(_))
    }

    /// Check if the backend could not be reached or understood
    pub fn is_backend(&self) -> bool {
        matches!(self, Self::Backend(_) | Self::Decode(_))
    }
}
