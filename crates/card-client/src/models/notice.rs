//! Notice response models

use card_core::Notice;
use serde::Deserialize;

use super::lenient::cell_text;

/// Response to `type=notices`
#[derive(Debug, Default, Deserialize)]
pub struct NoticesEnvelope {
    #[serde(default)]
    pub notices: Option<Vec<NoticePayload>>,
}

impl NoticesEnvelope {
    /// Notices in backend order; a missing list is empty
    pub fn into_notices(self) -> Vec<Notice> {
        self.notices
            .unwrap_or_default()
            .into_iter()
            .map(Notice::from)
            .collect()
    }
}

/// One notice row
#[derive(Debug, Default, Deserialize)]
pub struct NoticePayload {
    #[serde(default, deserialize_with = "cell_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "cell_text")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "cell_text")]
    pub published_at: Option<String>,
}

impl From<NoticePayload> for Notice {
    fn from(payload: NoticePayload) -> Self {
        Self {
            title: payload.title.unwrap_or_default(),
            body: payload.body.unwrap_or_default(),
            published_at: payload.published_at,
        }
    }
}
