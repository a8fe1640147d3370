//! Filename classification
//!
//! Archive items carry no structured episode metadata, so season/episode
//! numbers, release years and logical grouping are all recovered from file
//! names and date strings. Everything here is pure text processing and is
//! what decides whether an item is presented as a single movie or a series.

use std::sync::LazyLock;

use regex::Regex;

use super::types::ArchiveFile;

/// Files shorter than this are treated as non-playable stubs (intros,
/// spectrograms, samples).
pub const MIN_MEDIA_SECONDS: f32 = 10.0;

/// Which capture group carries which number in an episode pattern.
enum GroupOrder {
    SeasonEpisode,
    EpisodeSeason,
    EpisodeOnly,
}

struct EpisodePattern {
    re: Regex,
    order: GroupOrder,
}

/// Ordered list, first match wins.
static EPISODE_PATTERNS: LazyLock<Vec<EpisodePattern>> = LazyLock::new(|| {
    vec![
        EpisodePattern {
            // S01E01
            re: Regex::new(r"(?i)S(\d+)E(\d+)").expect("valid episode pattern"),
            order: GroupOrder::SeasonEpisode,
        },
        EpisodePattern {
            // S01 E01
            re: Regex::new(r"(?i)S(\d+)\s*E(\d+)").expect("valid episode pattern"),
            order: GroupOrder::SeasonEpisode,
        },
        EpisodePattern {
            // Season 1 Episode 1
            re: Regex::new(r"(?i)Season\s*(\d+)\D*Episode\s*(\d+)").expect("valid episode pattern"),
            order: GroupOrder::SeasonEpisode,
        },
        EpisodePattern {
            // Episode 1 Season 1
            re: Regex::new(r"(?i)Episode\s*(\d+)\D*Season\s*(\d+)").expect("valid episode pattern"),
            order: GroupOrder::EpisodeSeason,
        },
        EpisodePattern {
            // Episode 1
            re: Regex::new(r"(?i)Episode\s*(\d+)").expect("valid episode pattern"),
            order: GroupOrder::EpisodeOnly,
        },
    ]
});

/// Extract `(season, episode)` from a file name.
///
/// Returns `(None, None)` when no pattern matches. Numbers that overflow
/// `u32` are treated as unmatched groups.
#[must_use]
pub fn episode_info(file_name: &str) -> (Option<u32>, Option<u32>) {
    for pattern in EPISODE_PATTERNS.iter() {
        if let Some(caps) = pattern.re.captures(file_name) {
            let first = caps.get(1).and_then(|m| m.as_str().parse().ok());
            let second = caps.get(2).and_then(|m| m.as_str().parse().ok());
            return match pattern.order {
                GroupOrder::SeasonEpisode => (first, second),
                GroupOrder::EpisodeSeason => (second, first),
                GroupOrder::EpisodeOnly => (None, first),
            };
        }
    }
    (None, None)
}

static YEAR_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{4})\b").expect("valid year range pattern"));
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\b").expect("valid year pattern"));

/// Extract a release year from a date string.
///
/// A 4-character string is parsed directly. Longer strings are searched for
/// a `YYYY-YYYY` range (the start year wins) and then for a bare 4-digit
/// year in any position.
#[must_use]
pub fn year(date: &str) -> Option<i32> {
    if date.len() < 4 {
        return None;
    }
    if date.len() == 4 {
        return date.parse().ok();
    }
    if let Some(caps) = YEAR_RANGE.captures(date) {
        return caps.get(1).and_then(|m| m.as_str().parse().ok());
    }
    YEAR.captures(date)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Display form of a file name: path and extension stripped, underscores
/// replaced with spaces.
#[must_use]
pub fn base_name(file_name: &str) -> String {
    let file = file_name.rsplit('/').next().unwrap_or(file_name);
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
    stem.replace('_', " ")
}

static QUALITY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[\s._-]*\(?(?:480|720|1080)p?\)?$").expect("valid quality suffix pattern")
});

/// Title of the logical group a file belongs to.
///
/// Derived from [`base_name`] with the `.ia` variant marker and any trailing
/// quality marker removed, so `Ep1_480p.mp4` and `Ep1_720p.mp4` land in the
/// same group. Items publish the same footage at several qualities; without
/// this a two-quality movie would be misread as a two-episode series.
#[must_use]
pub fn group_title(file_name: &str) -> String {
    let cleaned = base_name(file_name).replace(".ia", "");
    QUALITY_SUFFIX.replace(&cleaned, "").trim().to_string()
}

/// Grouping key: [`group_title`], lower-cased. Idempotent.
#[must_use]
pub fn grouping_key(file_name: &str) -> String {
    group_title(file_name).to_lowercase()
}

/// Parse a file length into seconds.
///
/// The metadata API reports lengths either as fractional seconds
/// (`"123.45"`) or as clock strings (`"MM:SS"`, `"H:MM:SS"`). Unparseable
/// input counts as zero.
#[must_use]
pub fn length_seconds(length: &str) -> f32 {
    if let Ok(seconds) = length.parse::<f32>() {
        return seconds;
    }
    let parts: Vec<&str> = length.split(':').collect();
    let part = |i: usize| parts.get(i).and_then(|p| p.parse::<f32>().ok()).unwrap_or(0.0);
    match parts.len() {
        2 => part(0) * 60.0 + part(1),
        3 => part(0) * 3600.0 + part(1) * 60.0 + part(2),
        _ => 0.0,
    }
}

/// Whether a metadata `format` string names a playable video container.
#[must_use]
pub fn is_video_format(format: &str) -> bool {
    let lower = format.to_ascii_lowercase();
    lower.contains("mpeg")
        || lower.starts_with("h.264")
        || lower.starts_with("matroska")
        || lower.starts_with("divx")
        || lower.starts_with("ogg video")
}

/// Playable file filter: a video container that runs long enough to be
/// actual content.
#[must_use]
pub fn is_playable_video(file: &ArchiveFile) -> bool {
    is_video_format(&file.format)
        && file.length.as_deref().map_or(0.0, length_seconds) >= MIN_MEDIA_SECONDS
}
