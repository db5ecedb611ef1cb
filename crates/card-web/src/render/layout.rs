//! Shared page shell and fallback message block

use card_common::SiteConfig;
use card_service::PageMessage;

use super::escape::escape_html;

/// Wrap page content in the document shell
pub fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title}</title>
<link rel="manifest" href="/static/manifest.json" />
</head>
<body>
{body}
<script src="/static/pwa-register.js"></script>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

/// Link to the association's homepage
pub fn footer_link(site: &SiteConfig, suffix: &str) -> String {
    format!(
        r#"<div class="footer-link">
<a href="{href}" target="_blank" rel="noreferrer">{label}{name} {suffix}</a>
</div>"#,
        href = escape_html(&site.homepage_url),
        label = escape_html(&site.org_label),
        name = escape_html(&site.org_name),
        suffix = escape_html(suffix),
    )
}

/// Message block that replaces page content
pub fn message_block(site: &SiteConfig, message: PageMessage) -> String {
    // Message texts are fixed markup
    format!(
        "<div class=\"message\">{}</div>\n{}",
        message.html(),
        footer_link(site, "公式サイトへ")
    )
}
