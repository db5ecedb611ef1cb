//! Axum extractors for request handling
//!
//! Custom extractors for the member token and validated query strings.

mod token;
mod validated;

pub use token::TokenParams;
pub use validated::ValidatedQuery;
