//! Member response models

use card_core::Member;
use serde::Deserialize;
use serde_json::Value;

use super::lenient::{cell_text, is_blank};

/// Response to `type=member`
#[derive(Debug, Default, Deserialize)]
pub struct MemberEnvelope {
    /// Member object, or a blank value when the token matched nobody
    #[serde(default)]
    pub member: Option<Value>,
    /// Diagnostic message some backend versions attach to failures
    #[serde(default, deserialize_with = "cell_text")]
    pub error: Option<String>,
}

impl MemberEnvelope {
    /// Decode the member object, if the backend returned one
    pub fn into_member(self) -> Result<Option<Member>, serde_json::Error> {
        match self.member {
            Some(value) if !is_blank(&value) => {
                let payload: MemberPayload = serde_json::from_value(value)?;
                Ok(Some(payload.into()))
            }
            _ => Ok(None),
        }
    }
}

/// Member object as stored in the sheet
#[derive(Debug, Default, Deserialize)]
pub struct MemberPayload {
    #[serde(default, deserialize_with = "cell_text")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "cell_text")]
    pub member_id: Option<String>,
    #[serde(default, deserialize_with = "cell_text")]
    pub joined_date: Option<String>,
    #[serde(default, deserialize_with = "cell_text")]
    pub photo_url: Option<String>,
}

impl From<MemberPayload> for Member {
    fn from(payload: MemberPayload) -> Self {
        Self {
            display_name: payload.display_name,
            member_id: payload.member_id,
            joined_date: payload.joined_date,
            photo_url: payload.photo_url,
        }
    }
}
