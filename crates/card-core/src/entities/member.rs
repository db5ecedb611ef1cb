//! Member entity - one association member as returned by the backend

/// Name shown when the backend has no display name
pub const DEFAULT_DISPLAY_NAME: &str = "Member";

/// Placeholder shown for a missing member number or join date
pub const DEFAULT_MEMBER_ID: &str = "-";

/// Member record, kept in the raw form the backend delivered it.
///
/// Every field is optional; empty strings are treated the same as absent
/// values by the accessors below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Member {
    pub display_name: Option<String>,
    pub member_id: Option<String>,
    pub joined_date: Option<String>,
    pub photo_url: Option<String>,
}

impl Member {
    /// Display name, falling back to [`DEFAULT_DISPLAY_NAME`]
    pub fn display_name(&self) -> &str {
        non_empty(self.display_name.as_deref()).unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// Member number, falling back to [`DEFAULT_MEMBER_ID`]
    pub fn member_id(&self) -> &str {
        non_empty(self.member_id.as_deref()).unwrap_or(DEFAULT_MEMBER_ID)
    }

    /// Raw join date, if one was provided
    #[inline]
    pub fn joined_date(&self) -> Option<&str> {
        non_empty(self.joined_date.as_deref())
    }

    /// Raw photo URL, if one was provided
    #[inline]
    pub fn photo_url(&self) -> Option<&str> {
        non_empty(self.photo_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
