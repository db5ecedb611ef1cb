//! # card-service
//!
//! Application layer containing the page pipelines and their view models.

pub mod dto;
pub mod services;

pub use dto::{
    AudioWidgetView, HealthResponse, MemberCardPage, MemberCardView, NoticeListPage,
    NoticeListView, NoticeView, PageMessage, PhotoView, PlayerControlsView, PlayerPage,
    ReadinessResponse, TokenQuery, MAX_TOKEN_LENGTH,
};
pub use services::{
    HealthService, MemberCardService, NoticeService, PlayerService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
