//! Data transfer objects for pages and API responses
//!
//! This module provides:
//! - Request DTOs with validation for query inputs
//! - View models shared by the HTML renderer and the JSON API
//! - Mappers for converting domain entities to view models

pub mod mappers;
pub mod requests;
pub mod responses;
pub mod views;

pub use requests::{TokenQuery, MAX_TOKEN_LENGTH};

pub use responses::{HealthChecks, HealthResponse, ReadinessResponse};

pub use views::{
    AudioWidgetView, MemberCardPage, MemberCardView, NoticeListPage, NoticeListView, NoticeView,
    PageMessage, PhotoView, PlayerControlsView, PlayerPage,
};
