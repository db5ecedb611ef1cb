//! HTML page handlers
//!
//! Each page runs its pipeline and always answers with HTML; failures render
//! the page's fallback message.

use axum::extract::State;
use card_service::{MemberCardService, NoticeService, PlayerService};

use crate::extractors::TokenParams;
use crate::render;
use crate::response::HtmlPage;
use crate::state::AppState;

/// Member card page
///
/// GET /?token=
pub async fn member_card_page(State(state): State<AppState>, params: TokenParams) -> HtmlPage {
    let service = MemberCardService::new(state.service_context());
    let page = service.render(&params.0).await;
    let html = render::member_card_page(state.site(), &page, params.token());
    HtmlPage::new(page.status_code(), html)
}

/// Notices page
///
/// GET /notices?token=
pub async fn notices_page(State(state): State<AppState>, params: TokenParams) -> HtmlPage {
    let service = NoticeService::new(state.service_context());
    let page = service.render().await;
    let html = render::notices_page(state.site(), &page, params.token());
    HtmlPage::new(page.status_code(), html)
}

/// Audio player page
///
/// GET /player?token=
pub async fn player_page(State(state): State<AppState>, params: TokenParams) -> HtmlPage {
    let service = PlayerService::new(state.service_context());
    let page = service.render();
    let html = render::player_page(state.site(), &page, params.token());
    HtmlPage::new(page.status_code(), html)
}
