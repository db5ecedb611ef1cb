//! Member card service
//!
//! Resolves a token to a member and builds the card view, or the message that
//! replaces it.

use card_core::error::DomainError;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{AudioWidgetView, MemberCardPage, MemberCardView, TokenQuery};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member card service
pub struct MemberCardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberCardService<'a> {
    /// Create a new MemberCardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Look up the member for a token and build the card.
    ///
    /// A missing or invalid token fails before the backend is contacted.
    #[instrument(skip_all, fields(has_token = query.token().is_some()))]
    pub async fn load(&self, query: &TokenQuery) -> ServiceResult<MemberCardView> {
        let token = query.token().ok_or(DomainError::MissingToken)?;
        query
            .validate()
            .map_err(|e| DomainError::InvalidToken(e.to_string()))?;

        let member = self
            .ctx
            .member_repo()
            .find_by_token(token)
            .await?
            .ok_or(DomainError::MemberNotFound)?;

        let audio = self.ctx.audio_path().map(AudioWidgetView::initial);
        info!("Member card built");
        Ok(MemberCardView::from_member(&member, self.ctx.dates(), audio))
    }

    /// Build the card page, replacing failures with their page message
    pub async fn render(&self, query: &TokenQuery) -> MemberCardPage {
        match self.load(query).await {
            Ok(view) => MemberCardPage::Card(view),
            Err(e) => {
                if e.status_code() >= 500 {
                    warn!(error = %e, "Member card unavailable");
                } else {
                    info!(code = e.error_code(), "Member card not shown");
                }
                MemberCardPage::Message(e.member_card_message())
            }
        }
    }
}
