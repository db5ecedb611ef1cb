//! Audio widget and player page

use card_common::SiteConfig;
use card_core::AUDIO_LOAD_FAILED;
use card_service::{AudioWidgetView, PlayerPage};

use super::escape::{escape_html, token_href};
use super::layout::{document, message_block};

fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Script that wires the widget to its `<audio>` element
pub const PLAYER_SCRIPT: &str = "/static/player.js";

/// Play/pause button, progress track and time labels around an `<audio>` element
pub fn audio_widget(widget: &AudioWidgetView) -> String {
    let controls = &widget.controls;
    let alert = controls
        .alert
        .as_deref()
        .map(|text| format!("\n<p class=\"alert\" role=\"alert\">{}</p>", escape_html(text)))
        .unwrap_or_default();

    format!(
        r#"<div class="player" data-error-message="{error}">
<audio id="audio" class="audio" src="{src}" preload="metadata"></audio>
<button id="play-btn" class="play-btn" type="button" aria-label="再生/一時停止">
<span class="play-icon" style="display: {play}">&#9654;</span>
<span class="pause-icon" style="display: {pause}">&#10074;&#10074;</span>
</button>
<div class="progress-bar"><div id="progress" class="progress" style="width: {percent:.1}%"></div></div>
<div class="time"><span id="current-time" class="current-time">{current}</span> / <span id="duration" class="duration">{duration}</span></div>{alert}
</div>
<script src="{script}" defer></script>"#,
        src = escape_html(&widget.src),
        play = display(controls.show_play_icon),
        pause = display(controls.show_pause_icon),
        percent = controls.progress_percent,
        current = escape_html(&controls.current_time),
        duration = escape_html(&controls.duration),
        error = escape_html(AUDIO_LOAD_FAILED),
        script = PLAYER_SCRIPT,
    )
}

/// Full player page
pub fn player_page(site: &SiteConfig, page: &PlayerPage, token: Option<&str>) -> String {
    let content = match page {
        PlayerPage::Player(widget) => audio_widget(widget),
        PlayerPage::Message(message) => message_block(site, *message),
    };
    let body = format!(
        r#"<main class="player-page">
<h1 class="player-heading">音声</h1>
{content}
<p class="back-link"><a href="{back}">会員証に戻る</a></p>
</main>"#,
        back = escape_html(&token_href("/", token)),
    );
    document(&format!("音声 | {}", site.org_name), &body)
}
