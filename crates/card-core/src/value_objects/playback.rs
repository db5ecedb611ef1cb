//! Audio playback state
//!
//! Mirrors media element events into what the player controls should show.
//! There is no queue and no retry: the state is a two-way toggle plus the
//! last known position.

/// Events emitted by a media element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    Play,
    Pause,
    Ended,
    LoadedMetadata { duration: f64 },
    TimeUpdate { current: f64 },
    Error,
}

/// Play/pause mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackMode {
    #[default]
    Paused,
    Playing,
}

/// Current playback state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    pub mode: PlaybackMode,
    /// Seconds from the start
    pub position: f64,
    /// Total length in seconds, unknown until metadata loads
    pub duration: Option<f64>,
    /// Set after a media error; cleared by the next successful play
    pub failed: bool,
}

/// What the controls display for a given state
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub show_play_icon: bool,
    pub show_pause_icon: bool,
    /// Progress bar fill, 0-100
    pub progress_percent: f64,
    pub current_time: String,
    pub duration: String,
    /// Blocking alert to show, if any
    pub alert: Option<&'static str>,
}

/// Alert shown when the audio asset cannot be loaded
pub const AUDIO_LOAD_FAILED: &str = "音声ファイルの読み込みに失敗しました。";

impl PlaybackState {
    /// Apply one media event
    pub fn apply(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::Play => {
                self.mode = PlaybackMode::Playing;
                self.failed = false;
            }
            MediaEvent::Pause => self.mode = PlaybackMode::Paused,
            MediaEvent::Ended => {
                self.mode = PlaybackMode::Paused;
                self.position = 0.0;
            }
            MediaEvent::LoadedMetadata { duration } => {
                self.duration = Some(duration).filter(|d| d.is_finite() && *d > 0.0);
            }
            MediaEvent::TimeUpdate { current } => {
                if current.is_finite() {
                    self.position = current.max(0.0);
                }
            }
            MediaEvent::Error => {
                self.mode = PlaybackMode::Paused;
                self.failed = true;
            }
        }
    }

    /// Toggle in response to the play button
    pub fn toggle(&mut self) -> MediaEvent {
        let event = match self.mode {
            PlaybackMode::Paused => MediaEvent::Play,
            PlaybackMode::Playing => MediaEvent::Pause,
        };
        self.apply(event);
        event
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }

    /// Position to seek to after a click on the progress track.
    ///
    /// Returns `None` until the duration is known or if the track has no width.
    pub fn seek_target(&self, click_x: f64, track_width: f64) -> Option<f64> {
        let duration = self.duration?;
        if !(track_width.is_finite() && track_width > 0.0 && click_x.is_finite()) {
            return None;
        }
        let fraction = (click_x / track_width).clamp(0.0, 1.0);
        Some(fraction * duration)
    }

    /// Seek to a click on the progress track
    pub fn seek(&mut self, click_x: f64, track_width: f64) -> Option<f64> {
        let target = self.seek_target(click_x, track_width)?;
        self.position = target;
        Some(target)
    }

    /// Render the controls for this state
    pub fn view(&self) -> PlayerView {
        let progress_percent = match self.duration {
            Some(duration) => (self.position / duration * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        };

        PlayerView {
            show_play_icon: !self.is_playing(),
            show_pause_icon: self.is_playing(),
            progress_percent,
            current_time: format_time(self.position),
            duration: format_time(self.duration.unwrap_or(f64::NAN)),
            alert: self.failed.then_some(AUDIO_LOAD_FAILED),
        }
    }
}

/// Format seconds as `m:ss`; non-finite input renders as `0:00`
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
