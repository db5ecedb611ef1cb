//! Date parsing and locale-aware display
//!
//! The backend is a spreadsheet, so dates arrive in whatever shape the sheet
//! produced: plain `YYYY-MM-DD` cells, RFC 3339 timestamps for date-typed
//! cells, or slash-separated dates typed by hand.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, Utc,
};

/// Calendar formatting convention used for displayed dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayLocale {
    /// `2025/12/1`
    #[default]
    JaJp,
    /// `12/1/2025`
    EnUs,
    /// `01/12/2025`
    EnGb,
    /// `2025-12-01`
    Iso,
}

impl DisplayLocale {
    /// Format a calendar date in this locale's short numeric form
    pub fn format(self, date: NaiveDate) -> String {
        let (y, m, d) = (date.year(), date.month(), date.day());
        match self {
            Self::JaJp => format!("{y}/{m}/{d}"),
            Self::EnUs => format!("{m}/{d}/{y}"),
            Self::EnGb => format!("{d:02}/{m:02}/{y}"),
            Self::Iso => format!("{y}-{m:02}-{d:02}"),
        }
    }

    /// BCP 47 tag for this locale
    pub fn tag(self) -> &'static str {
        match self {
            Self::JaJp => "ja-JP",
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::Iso => "iso",
        }
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned for an unsupported locale tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for DisplayLocale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "ja-jp" | "ja" => Ok(Self::JaJp),
            "en-us" | "en" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "iso" | "iso-8601" => Ok(Self::Iso),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Parses raw backend dates and renders them for display.
///
/// Timestamps carrying an offset are shifted into `offset` before their
/// calendar date is taken; date-only and offset-less values are used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    locale: DisplayLocale,
    offset: FixedOffset,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            locale: DisplayLocale::JaJp,
            offset: jst(),
        }
    }
}

impl DateFormatter {
    /// Create a formatter for a locale and display offset
    pub fn new(locale: DisplayLocale, offset: FixedOffset) -> Self {
        Self { locale, offset }
    }

    /// Create a formatter from an offset in minutes east of UTC.
    ///
    /// Returns `None` when the offset is outside +/-24h.
    pub fn with_offset_minutes(locale: DisplayLocale, minutes: i32) -> Option<Self> {
        FixedOffset::east_opt(minutes.checked_mul(60)?).map(|offset| Self::new(locale, offset))
    }

    #[inline]
    pub fn locale(&self) -> DisplayLocale {
        self.locale
    }

    #[inline]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Parse a raw value into a local date-time in the display offset
    pub fn parse(&self, raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&self.offset).naive_local());
        }

        const DATE_TIME_FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M:%S",
            "%Y/%m/%d %H:%M:%S",
            "%Y-%m-%dT%H:%M",
        ];
        if let Some(dt) = DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        {
            return Some(dt);
        }

        const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
            .map(|date| date.and_time(NaiveTime::MIN))
    }

    /// Format a raw value, or `None` if it is absent or unparseable
    pub fn format(&self, raw: Option<&str>) -> Option<String> {
        raw.and_then(|raw| self.parse(raw))
            .map(|dt| self.locale.format(dt.date()))
    }

    /// Format a raw value, substituting `fallback` when it cannot be shown
    pub fn format_or(&self, raw: Option<&str>, fallback: &str) -> String {
        self.format(raw).unwrap_or_else(|| fallback.to_string())
    }
}

/// Japan Standard Time, the association's home zone
fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap_or_else(|| Utc.fix())
}
