//! Details-page scraping
//!
//! The metadata API does not cover every item layout, so link extraction
//! falls back to scraping the human-facing `/details/{identifier}` page:
//! download anchors first, the `og:video` meta tag when an item exposes no
//! direct downloads.

use std::sync::LazyLock;

use scraper::{Html, Selector};

/// File extensions accepted as directly playable media.
pub const MEDIA_EXTENSIONS: [&str; 9] =
    ["mp4", "mpg", "mkv", "avi", "ogv", "ogg", "mp3", "wav", "flac"];

static DOWNLOAD_ANCHOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"a[href*="/download/"]"#).expect("valid anchor selector")
});

static OG_VIDEO_META: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:video"]"#).expect("valid meta selector")
});

/// Whether a path or URL ends in one of the allowed media extensions.
#[must_use]
pub fn has_media_extension(path: &str) -> bool {
    path.rsplit_once('.')
        .map(|(_, ext)| MEDIA_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Hrefs of download anchors pointing at playable media files.
///
/// Hrefs are returned as found in the page (usually site-relative); the
/// caller resolves them against the site base URL.
#[must_use]
pub fn download_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&DOWNLOAD_ANCHOR)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| has_media_extension(href))
        .map(ToString::to_string)
        .collect()
}

/// `og:video` fallback for pages without direct download anchors.
#[must_use]
pub fn og_video(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    document
        .select(&OG_VIDEO_META)
        .next()
        .and_then(|element| element.value().attr("content"))
        .filter(|content| !content.is_empty())
        .map(ToString::to_string)
}
