//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the backend API, and the
//! client crate provides the HTTP implementation.

use async_trait::async_trait;

use crate::entities::{Member, Notice};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Look up the member a token grants access to.
    ///
    /// `Ok(None)` means the backend answered but knows no such member.
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Member>>;
}

#[async_trait]
pub trait NoticeRepository: Send + Sync {
    /// Fetch every published notice, in backend order
    async fn list_all(&self) -> RepoResult<Vec<Notice>>;
}
