//! Release-notes extraction
//!
//! Pulls bullet-point lines and the "Full Changelog" compare link out of
//! free-form markdown release notes.

use regex::Regex;
use std::sync::LazyLock;

/// Leading bullet markers: a run of `*`/`-` followed by whitespace or end of line
///
/// Marker-only lines such as `---` or a lone `-` strip to nothing and are
/// dropped on purpose rather than reported as literal items.
static BULLET_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*-]+(?:\s+|$)").unwrap());

/// First http(s) URL token on a line
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

const FULL_CHANGELOG_MARKER: &str = "Full Changelog";

/// Characters that end a line in release notes
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text into lines on every line-break character, `\r\n` counting once
///
/// A trailing break does not produce an empty final line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !LINE_BREAKS.contains(&ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Extract bullet items in order of appearance
///
/// Duplicates are preserved; items that are empty once the marker is
/// stripped are dropped.
pub fn extract_items(body: &str) -> Vec<String> {
    split_lines(body)
        .into_iter()
        .map(str::trim)
        .filter(|line| line.starts_with('*') || line.starts_with('-'))
        .map(|line| BULLET_MARKER_RE.replace(line, "").trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Extract the compare URL from the first "Full Changelog" line carrying a link
pub fn extract_compare_url(body: &str) -> Option<String> {
    split_lines(body)
        .into_iter()
        .filter(|line| line.contains(FULL_CHANGELOG_MARKER) && line.contains("http"))
        .find_map(|line| URL_RE.find(line))
        .map(|m| m.as_str().trim_end_matches(['\n', '\r']).to_string())
}
