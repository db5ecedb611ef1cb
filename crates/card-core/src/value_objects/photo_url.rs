//! Photo URL normalization
//!
//! Member photos are usually uploaded to Google Drive and shared as
//! "file view" links, which cannot be used directly as an image source.

/// Marker identifying a Drive share link
const DRIVE_SHARE_MARKER: &str = "drive.google.com/file/d/";

/// Path segment preceding the file ID
const FILE_ID_PREFIX: &str = "/file/d/";

/// Direct-content endpoint for Drive files
const DRIVE_DIRECT_BASE: &str = "https://drive.google.com/uc?export=view&id=";

/// Normalize a raw photo URL into one usable as an `<img>` source.
///
/// - absent or blank input yields an empty string
/// - Drive share links (`.../file/d/<ID>/view?...`) become
///   `https://drive.google.com/uc?export=view&id=<ID>`
/// - anything else is returned unchanged
pub fn normalize_photo_url(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return String::new(),
    };

    match drive_file_id(raw) {
        Some(id) => format!("{DRIVE_DIRECT_BASE}{id}"),
        None => raw.to_string(),
    }
}

/// Extract the file ID from a Drive share link
fn drive_file_id(url: &str) -> Option<&str> {
    if !url.contains(DRIVE_SHARE_MARKER) {
        return None;
    }

    let start = url.find(FILE_ID_PREFIX)? + FILE_ID_PREFIX.len();
    let rest = &url[start..];
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());

    Some(&rest[..end]).filter(|id| !id.is_empty())
}
