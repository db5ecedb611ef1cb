//! Member token extractor for HTML pages
//!
//! Pages never reject a request: a query string that cannot be decoded is
//! treated as one without a token.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use card_service::TokenQuery;
use std::convert::Infallible;
use tracing::debug;

/// Token query of a page request
#[derive(Debug, Clone, Default)]
pub struct TokenParams(pub TokenQuery);

impl TokenParams {
    /// The token, if present and non-empty
    pub fn token(&self) -> Option<&str> {
        self.0.token()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for TokenParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<TokenQuery>::from_request_parts(parts, state).await {
            Ok(Query(query)) => Ok(Self(query)),
            Err(e) => {
                debug!(error = %e, "Unreadable query string, treating token as absent");
                Ok(Self::default())
            }
        }
    }
}
