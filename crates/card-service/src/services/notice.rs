//! Notice service
//!
//! Fetches all announcements, orders them newest first and formats them.

use card_core::sort_newest_first;
use tracing::{info, instrument, warn};

use crate::dto::{NoticeListPage, NoticeListView, NoticeView, PageMessage};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notice service
pub struct NoticeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NoticeService<'a> {
    /// Create a new NoticeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch and format the notice list
    #[instrument(skip(self))]
    pub async fn load(&self) -> ServiceResult<NoticeListView> {
        let mut notices = self.ctx.notice_repo().list_all().await?;
        sort_newest_first(&mut notices, self.ctx.dates());

        let notices: Vec<NoticeView> = notices
            .iter()
            .map(|n| NoticeView::from_notice(n, self.ctx.dates()))
            .collect();

        info!(count = notices.len(), "Notice list built");
        Ok(NoticeListView { notices })
    }

    /// Build the notices page; an empty list renders the "no notices" message
    pub async fn render(&self) -> NoticeListPage {
        match self.load().await {
            Ok(list) if list.notices.is_empty() => NoticeListPage::Message(PageMessage::NoNotices),
            Ok(list) => NoticeListPage::List(list),
            Err(e) => {
                warn!(error = %e, "Notice list unavailable");
                NoticeListPage::Message(e.notices_message())
            }
        }
    }
}
