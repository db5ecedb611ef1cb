//! In-memory repositories for service tests

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use card_core::entities::{Member, Notice};
use card_core::error::DomainError;
use card_core::traits::{MemberRepository, NoticeRepository, RepoResult};

/// Member store keyed by token that counts lookups
pub struct FakeMembers {
    members: Vec<(String, Member)>,
    fail: bool,
    calls: AtomicUsize,
}

impl FakeMembers {
    pub fn empty() -> Self {
        Self {
            members: Vec::new(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with(token: &str, member: Member) -> Self {
        Self {
            members: vec![(token.to_string(), member)],
            ..Self::empty()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::empty()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MemberRepository for FakeMembers {
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Member>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::Backend("connection refused".to_string()));
        }
        Ok(self
            .members
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, m)| m.clone()))
    }
}

/// Fixed notice list that counts fetches
pub struct FakeNotices {
    notices: Option<Vec<Notice>>,
    calls: AtomicUsize,
}

impl FakeNotices {
    pub fn with(notices: Vec<Notice>) -> Self {
        Self {
            notices: Some(notices),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            notices: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NoticeRepository for FakeNotices {
    async fn list_all(&self) -> RepoResult<Vec<Notice>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.notices
            .clone()
            .ok_or_else(|| DomainError::Decode("malformed JSONP".to_string()))
    }
}
