//! Service context - dependency container for services
//!
//! Holds the repositories and presentation settings needed by the page pipelines.

use std::sync::Arc;

use card_core::traits::{MemberRepository, NoticeRepository};
use card_core::DateFormatter;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Member and notice repositories
/// - The date formatter for the site's locale and time zone
/// - The audio asset path, when the player is enabled
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    notice_repo: Arc<dyn NoticeRepository>,

    // Presentation
    dates: DateFormatter,
    audio_path: Option<String>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        notice_repo: Arc<dyn NoticeRepository>,
        dates: DateFormatter,
        audio_path: Option<String>,
    ) -> Self {
        Self {
            member_repo,
            notice_repo,
            dates,
            audio_path: audio_path.filter(|p| !p.trim().is_empty()),
        }
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the notice repository
    pub fn notice_repo(&self) -> &dyn NoticeRepository {
        self.notice_repo.as_ref()
    }

    // === Presentation ===

    /// Get the date formatter
    pub fn dates(&self) -> &DateFormatter {
        &self.dates
    }

    /// Get the audio asset path, if audio playback is enabled
    pub fn audio_path(&self) -> Option<&str> {
        self.audio_path.as_deref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("dates", &self.dates)
            .field("audio_path", &self.audio_path)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    notice_repo: Option<Arc<dyn NoticeRepository>>,
    dates: DateFormatter,
    audio_path: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            member_repo: None,
            notice_repo: None,
            dates: DateFormatter::default(),
            audio_path: None,
        }
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn notice_repo(mut self, repo: Arc<dyn NoticeRepository>) -> Self {
        self.notice_repo = Some(repo);
        self
    }

    pub fn dates(mut self, dates: DateFormatter) -> Self {
        self.dates = dates;
        self
    }

    pub fn audio_path(mut self, path: Option<String>) -> Self {
        self.audio_path = path;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.notice_repo
                .ok_or_else(|| ServiceError::validation("notice_repo is required"))?,
            self.dates,
            self.audio_path,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
