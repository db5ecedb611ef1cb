//! Notices page

use card_common::SiteConfig;
use card_service::{NoticeListPage, NoticeView};

use super::escape::{escape_html, token_href};
use super::layout::document;

/// One `<article>` per notice
pub fn notice_article(notice: &NoticeView) -> String {
    let body = notice
        .body_lines
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br>");

    format!(
        r#"<article class="notice-item">
<h2 class="notice-title">{title}</h2>
<div class="notice-meta">{date}</div>
<div class="notice-body">{body}</div>
</article>"#,
        title = escape_html(&notice.title),
        date = escape_html(&notice.date),
    )
}

/// Full notices page: a status line and the article list
pub fn notices_page(site: &SiteConfig, page: &NoticeListPage, token: Option<&str>) -> String {
    let (status, list) = match page {
        NoticeListPage::List(list) => (
            String::new(),
            list.notices.iter().map(notice_article).collect::<Vec<_>>().join("\n"),
        ),
        NoticeListPage::Message(message) => (message.html().to_string(), String::new()),
    };

    let body = format!(
        r#"<main class="notices">
<h1 class="notices-heading">お知らせ</h1>
<div id="notices-status" class="notices-status">{status}</div>
<div id="notices-list" class="notices-list">{list}</div>
<p class="back-link"><a href="{back}">会員証に戻る</a></p>
</main>"#,
        back = escape_html(&token_href("/", token)),
    );
    document(&format!("お知らせ | {}", site.org_name), &body)
}
