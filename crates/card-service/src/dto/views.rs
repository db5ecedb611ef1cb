//! View models produced by the page pipelines
//!
//! Every view is `Serialize` so the same value can feed the HTML renderer and
//! the JSON API.

use card_core::PlayerView;
use serde::Serialize;

// ============================================================================
// Page Messages
// ============================================================================

/// Fixed message rendered in place of page content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageMessage {
    /// Page opened without a member token
    MissingToken,
    /// Backend has no member for the token
    MemberNotFound,
    /// Member lookup failed in transit or could not be decoded
    CommunicationError,
    /// Notice list is empty
    NoNotices,
    /// Notice list could not be fetched
    NoticesFailed,
    /// No audio asset is configured
    AudioUnavailable,
}

impl PageMessage {
    /// Message text as HTML. Line breaks are already `<br>` tags.
    pub fn html(self) -> &'static str {
        match self {
            Self::MissingToken => {
                "このページはセルフラブ協会の会員証表示用ページです。<br>事務局から共有された会員証URLでアクセスしてください。"
            }
            Self::MemberNotFound => "会員情報が見つかりませんでした。",
            Self::CommunicationError => "通信エラーが発生しました。時間をおいて再度お試しください。",
            Self::NoNotices => "現在お知らせはありません。",
            Self::NoticesFailed => "お知らせの取得に失敗しました。時間をおいて再度お試しください。",
            Self::AudioUnavailable => "現在音声を再生できません。",
        }
    }

    /// Message text without markup
    pub fn text(self) -> String {
        self.html().replace("<br>", "\n")
    }

    /// HTTP status of a page showing this message
    pub fn status_code(self) -> u16 {
        match self {
            Self::MissingToken | Self::NoNotices => 200,
            Self::MemberNotFound | Self::AudioUnavailable => 404,
            Self::CommunicationError | Self::NoticesFailed => 502,
        }
    }
}

// ============================================================================
// Member Card
// ============================================================================

/// Display-ready member card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberCardView {
    pub display_name: String,
    pub member_id: String,
    /// Formatted join date, or "-"
    pub joined: String,
    pub photo: PhotoView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioWidgetView>,
}

/// Member photo block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhotoView {
    Image { src: String, alt: String },
    Placeholder,
}

/// Outcome of the member card pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum MemberCardPage {
    Card(MemberCardView),
    Message(PageMessage),
}

impl MemberCardPage {
    /// HTTP status of the rendered page
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Card(_) => 200,
            Self::Message(message) => message.status_code(),
        }
    }
}

// ============================================================================
// Notices
// ============================================================================

/// One announcement, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeView {
    pub title: String,
    /// Formatted publish date; empty when missing or unparseable
    pub date: String,
    pub body_lines: Vec<String>,
}

/// Announcements, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeListView {
    pub notices: Vec<NoticeView>,
}

/// Outcome of the notice list pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum NoticeListPage {
    List(NoticeListView),
    Message(PageMessage),
}

impl NoticeListPage {
    /// HTTP status of the rendered page
    pub fn status_code(&self) -> u16 {
        match self {
            Self::List(_) => 200,
            Self::Message(message) => message.status_code(),
        }
    }
}

// ============================================================================
// Audio
// ============================================================================

/// Audio element plus the state of its controls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioWidgetView {
    pub src: String,
    pub controls: PlayerControlsView,
}

/// Serializable form of [`PlayerView`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerControlsView {
    pub show_play_icon: bool,
    pub show_pause_icon: bool,
    pub progress_percent: f64,
    pub current_time: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

/// Outcome of the player pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerPage {
    Player(AudioWidgetView),
    Message(PageMessage),
}

impl PlayerPage {
    /// HTTP status of the rendered page
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Player(_) => 200,
            Self::Message(message) => message.status_code(),
        }
    }
}

impl From<PlayerView> for PlayerControlsView {
    fn from(view: PlayerView) -> Self {
        Self {
            show_play_icon: view.show_play_icon,
            show_pause_icon: view.show_pause_icon,
            progress_percent: view.progress_percent,
            current_time: view.current_time,
            duration: view.duration,
            alert: view.alert.map(str::to_string),
        }
    }
}
