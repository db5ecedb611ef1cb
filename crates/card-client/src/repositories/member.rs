//! HTTP implementation of MemberRepository

use async_trait::async_trait;
use tracing::{info, instrument};

use card_common::redact_token;
use card_core::entities::Member;
use card_core::error::DomainError;
use card_core::traits::{MemberRepository, RepoResult};

use crate::client::BackendClient;
use crate::error::ClientError;

/// Backend-API implementation of MemberRepository
#[derive(Clone)]
pub struct HttpMemberRepository {
    client: BackendClient,
}

impl HttpMemberRepository {
    /// Create a new HttpMemberRepository
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MemberRepository for HttpMemberRepository {
    #[instrument(skip(self, token), fields(token = %redact_token(token)))]
    async fn find_by_token(&self, token: &str) -> RepoResult<Option<Member>> {
        let envelope = self.client.fetch_member(token).await?;
        let member = envelope
            .into_member()
            .map_err(|e| DomainError::from(ClientError::from(e)))?;

        info!(found = member.is_some(), "Member lookup finished");
        Ok(member)
    }
}
