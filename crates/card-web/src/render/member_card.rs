//! Member card page

use card_common::SiteConfig;
use card_service::{MemberCardPage, MemberCardView, PhotoView};

use super::escape::{escape_html, token_href};
use super::layout::{document, footer_link, message_block};
use super::player::audio_widget;

fn photo_block(photo: &PhotoView) -> String {
    match photo {
        PhotoView::Image { src, alt } => format!(
            r#"<div class="photo"><img src="{}" alt="{}" /></div>"#,
            escape_html(src),
            escape_html(alt)
        ),
        PhotoView::Placeholder => r#"<div class="photo">No Photo</div>"#.to_string(),
    }
}

/// Card markup: logo, header, photo, name, number and join date
pub fn card(site: &SiteConfig, view: &MemberCardView, token: Option<&str>) -> String {
    let audio = view
        .audio
        .as_ref()
        .map(|widget| format!("\n{}", audio_widget(widget)))
        .unwrap_or_default();

    format!(
        r#"<div class="card-logo">
<img src="{logo}" alt="{org_name}ロゴ" />
</div>
<div class="card-header">
<div class="label">{org_label}</div>
<div class="title">{org_name}</div>
</div>
<div class="photo-wrap">
{photo}
</div>
<div class="info">
<div class="name">{name}</div>
<div>会員番号：{member_id}</div>
<div>入会日：{joined}</div>
</div>{audio}
<nav class="page-links"><a href="{notices}">お知らせ</a></nav>
{footer}"#,
        logo = escape_html(&site.logo_path),
        org_label = escape_html(&site.org_label),
        org_name = escape_html(&site.org_name),
        photo = photo_block(&view.photo),
        name = escape_html(&view.display_name),
        member_id = escape_html(&view.member_id),
        joined = escape_html(&view.joined),
        notices = escape_html(&token_href("/notices", token)),
        footer = footer_link(site, "公式サイト"),
    )
}

/// Full member card page
pub fn member_card_page(site: &SiteConfig, page: &MemberCardPage, token: Option<&str>) -> String {
    let content = match page {
        MemberCardPage::Card(view) => card(site, view, token),
        MemberCardPage::Message(message) => message_block(site, *message),
    };
    let body = format!("<main id=\"card\" class=\"card\">\n{content}\n</main>");
    document(&format!("{} 会員証", site.org_name), &body)
}
