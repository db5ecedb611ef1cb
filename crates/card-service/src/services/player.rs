//! Audio player service

use crate::dto::{AudioWidgetView, PageMessage, PlayerPage};

use super::context::ServiceContext;

/// Audio player service
pub struct PlayerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlayerService<'a> {
    /// Create a new PlayerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Widget for the configured audio asset, if any
    pub fn widget(&self) -> Option<AudioWidgetView> {
        self.ctx.audio_path().map(AudioWidgetView::initial)
    }

    /// Build the player page
    pub fn render(&self) -> PlayerPage {
        match self.widget() {
            Some(widget) => PlayerPage::Player(widget),
            None => PlayerPage::Message(PageMessage::AudioUnavailable),
        }
    }
}
