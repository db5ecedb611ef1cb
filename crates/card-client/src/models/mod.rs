//! Wire models for backend responses
//!
//! The backend is a spreadsheet web app, so payloads are loosely typed:
//! these models accept what it actually sends and map it to domain entities.

mod lenient;
mod member;
mod notice;

pub use member::{MemberEnvelope, MemberPayload};
pub use notice::{NoticePayload, NoticesEnvelope};
