//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use card_core::DomainError;
use std::fmt;

use crate::dto::PageMessage;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or backend failure
    Domain(DomainError),

    /// Validation error
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() {
                    400
                } else if e.is_backend() {
                    502
                } else {
                    500
                }
            }
            Self::Validation(_) => 400,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Message shown in place of the member card
    ///
    /// A token that fails validation can never match a member, so it is
    /// reported the same way as an unknown one.
    pub fn member_card_message(&self) -> PageMessage {
        match self {
            Self::Domain(DomainError::MissingToken) => PageMessage::MissingToken,
            Self::Domain(DomainError::MemberNotFound | DomainError::InvalidToken(_))
            | Self::Validation(_) => PageMessage::MemberNotFound,
            _ => PageMessage::CommunicationError,
        }
    }

    /// Message shown in place of the notice list
    pub fn notices_message(&self) -> PageMessage {
        PageMessage::NoticesFailed
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
