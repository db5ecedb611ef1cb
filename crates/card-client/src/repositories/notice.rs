//! HTTP implementation of NoticeRepository

use async_trait::async_trait;
use tracing::{info, instrument};

use card_core::entities::Notice;
use card_core::traits::{NoticeRepository, RepoResult};

use crate::client::BackendClient;

/// Backend-API implementation of NoticeRepository
#[derive(Clone)]
pub struct HttpNoticeRepository {
    client: BackendClient,
}

impl HttpNoticeRepository {
    /// Create a new HttpNoticeRepository
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NoticeRepository for HttpNoticeRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Notice>> {
        let notices = self.client.fetch_notices().await?.into_notices();

        info!(count = notices.len(), "Notices fetched");
        Ok(notices)
    }
}
