//! # card-client
//!
//! Backend layer implementing the repository traits against the
//! spreadsheet-backed web API.
//!
//! ## Overview
//!
//! - `BackendClient`: one reqwest client bound to the API base URL
//! - Wire models for the loosely typed JSON the backend produces
//! - JSONP unwrapping for deployments that only answer with callbacks
//! - Repository implementations used by the service layer
//!
//! ## Usage
//!
//! ```rust,ignore
//! use card_client::{BackendClient, HttpMemberRepository};
//! use card_core::traits::MemberRepository;
//!
//! async fn example(config: &card_common::BackendConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BackendClient::new(config)?;
//!     let members = HttpMemberRepository::new(client);
//!     let member = members.find_by_token("token").await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod jsonp;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use client::BackendClient;
pub use error::ClientError;
pub use repositories::{HttpMemberRepository, HttpNoticeRepository};
