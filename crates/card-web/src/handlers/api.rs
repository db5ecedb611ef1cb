//! JSON API handlers
//!
//! Expose the page view models for clients that render on their own.

use axum::{extract::State, Json};
use card_service::{MemberCardService, MemberCardView, NoticeListView, NoticeService, TokenQuery};

use crate::extractors::ValidatedQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the member card view for a token
///
/// GET /api/v1/member-card?token=
pub async fn get_member_card(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<TokenQuery>,
) -> ApiResult<Json<MemberCardView>> {
    let service = MemberCardService::new(state.service_context());
    let response = service.load(&query).await?;
    Ok(Json(response))
}

/// Get all notices, newest first
///
/// GET /api/v1/notices
pub async fn get_notices(State(state): State<AppState>) -> ApiResult<Json<NoticeListView>> {
    let service = NoticeService::new(state.service_context());
    let response = service.load().await?;
    Ok(Json(response))
}
