//! HTML escaping and token links

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link to `path`, carrying the member token when there is one
pub fn token_href(path: &str, token: Option<&str>) -> String {
    match token {
        Some(token) => format!("{path}?token={}", urlencoding::encode(token)),
        None => path.to_string(),
    }
}
