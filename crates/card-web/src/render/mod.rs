//! HTML rendering
//!
//! Pure functions from view models to markup. Every value that came from the
//! backend or configuration is escaped; page messages are fixed markup.

mod escape;
mod layout;
mod member_card;
mod notices;
mod player;

pub use escape::{escape_html, token_href};
pub use layout::{document, footer_link, message_block};
pub use member_card::{card, member_card_page};
pub use notices::{notice_article, notices_page};
pub use player::{audio_widget, player_page};
