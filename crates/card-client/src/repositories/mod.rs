//! Repository implementations backed by the HTTP client

mod member;
mod notice;

pub use member::HttpMemberRepository;
pub use notice::HttpNoticeRepository;
