//! Domain entities - core business objects

mod member;
mod notice;

pub use member::{Member, DEFAULT_DISPLAY_NAME, DEFAULT_MEMBER_ID};
pub use notice::{sort_newest_first, Notice};
