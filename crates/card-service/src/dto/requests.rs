//! Request DTOs for page and API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Longest member token, in characters, accepted before any backend call is made
pub const MAX_TOKEN_LENGTH: u64 = 256;

/// Query string of the member card and the pages linking back to it
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TokenQuery {
    #[validate(length(max = MAX_TOKEN_LENGTH, message = "token is too long"))]
    pub token: Option<String>,
}

impl TokenQuery {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// The token, if present and non-empty
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
