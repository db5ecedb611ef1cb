//! Value objects - immutable types that represent domain concepts

mod display_date;
mod photo_url;
mod playback;

pub use display_date::{DateFormatter, DisplayLocale, UnknownLocale};
pub use photo_url::normalize_photo_url;
pub use playback::{
    format_time, MediaEvent, PlaybackMode, PlaybackState, PlayerView, AUDIO_LOAD_FAILED,
};
