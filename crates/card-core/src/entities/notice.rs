//! Notice entity - one announcement published by the association

use crate::value_objects::DateFormatter;

/// Announcement record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    /// Body text; newlines are significant
    pub body: String,
    pub published_at: Option<String>,
}

impl Notice {
    /// Create a notice without a publish date
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            published_at: None,
        }
    }

    /// Set the raw publish date
    pub fn published(mut self, published_at: impl Into<String>) -> Self {
        self.published_at = Some(published_at.into());
        self
    }

    /// Raw publish date, if one was provided
    pub fn published_at(&self) -> Option<&str> {
        self.published_at
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Body split into display lines (`\n` and `\r\n` both break)
    pub fn body_lines(&self) -> Vec<&str> {
        if self.body.is_empty() {
            return Vec::new();
        }
        self.body
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }
}

/// Order notices newest first.
///
/// Only notices with a parseable publish date move: they are sorted by date
/// (descending, ties keep input order) into the slots dated notices occupied.
/// Undated notices stay exactly where they were.
pub fn sort_newest_first(notices: &mut [Notice], dates: &DateFormatter) {
    let mut dated: Vec<(usize, _)> = notices
        .iter()
        .enumerate()
        .filter_map(|(idx, notice)| {
            notice
                .published_at()
                .and_then(|raw| dates.parse(raw))
                .map(|ts| (idx, ts))
        })
        .collect();

    let slots: Vec<usize> = dated.iter().map(|(idx, _)| *idx).collect();
    dated.sort_by(|a, b| b.1.cmp(&a.1));

    let originals: Vec<Notice> = dated
        .iter()
        .map(|(idx, _)| std::mem::take(&mut notices[*idx]))
        .collect();
    for (slot, notice) in slots.into_iter().zip(originals) {
        notices[slot] = notice;
    }
}
