//! Page services
//!
//! Each service runs one page pipeline: fetch from the backend, normalize,
//! and build a view model or the message that replaces it.

pub mod context;
pub mod error;
pub mod health;
pub mod member_card;
pub mod notice;
pub mod player;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use member_card::MemberCardService;
pub use notice::NoticeService;
pub use player::PlayerService;
