//! # card-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (HTTP client, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{sort_newest_first, Member, Notice, DEFAULT_DISPLAY_NAME, DEFAULT_MEMBER_ID};
pub use error::DomainError;
pub use traits::{MemberRepository, NoticeRepository, RepoResult};
pub use value_objects::{
    format_time, normalize_photo_url, DateFormatter, DisplayLocale, MediaEvent, PlaybackMode,
    PlaybackState, PlayerView, UnknownLocale, AUDIO_LOAD_FAILED,
};
