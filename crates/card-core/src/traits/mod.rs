//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{MemberRepository, NoticeRepository, RepoResult};
