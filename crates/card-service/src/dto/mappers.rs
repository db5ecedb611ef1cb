//! Entity to view-model mappers
//!
//! These conversions are pure: they take the normalized domain values and the
//! site's date formatter and produce display strings.

use card_core::entities::{Member, Notice, DEFAULT_MEMBER_ID};
use card_core::{normalize_photo_url, DateFormatter, PlaybackState};

use super::views::{AudioWidgetView, MemberCardView, NoticeView, PhotoView};

// ============================================================================
// Member Mappers
// ============================================================================

impl MemberCardView {
    /// Build the card for a member
    pub fn from_member(member: &Member, dates: &DateFormatter, audio: Option<AudioWidgetView>) -> Self {
        Self {
            display_name: member.display_name().to_string(),
            member_id: member.member_id().to_string(),
            joined: dates.format_or(member.joined_date(), DEFAULT_MEMBER_ID),
            photo: PhotoView::for_member(member),
            audio,
        }
    }
}

impl PhotoView {
    /// Photo block for a member: the normalized image URL or a placeholder
    pub fn for_member(member: &Member) -> Self {
        let src = normalize_photo_url(member.photo_url());
        if src.is_empty() {
            Self::Placeholder
        } else {
            Self::Image {
                src,
                alt: member.display_name().to_string(),
            }
        }
    }
}

// ============================================================================
// Notice Mappers
// ============================================================================

impl NoticeView {
    /// Build the display form of one notice
    pub fn from_notice(notice: &Notice, dates: &DateFormatter) -> Self {
        Self {
            title: notice.title.clone(),
            date: dates.format(notice.published_at()).unwrap_or_default(),
            body_lines: notice.body_lines().into_iter().map(str::to_string).collect(),
        }
    }
}

// ============================================================================
// Audio Mappers
// ============================================================================

impl AudioWidgetView {
    /// Widget for `src` in its initial paused state
    pub fn initial(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            controls: PlaybackState::default().view().into(),
        }
    }
}
