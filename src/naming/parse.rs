//! Tolerant extraction of track names from free-form model output

use regex::Regex;
use std::sync::LazyLock;

/// Upper bound on names returned per request
pub const MAX_NAMES: usize = 10;

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\s*(.*)").expect("numbered-line pattern is valid"));

/// Parse a raw reply into at most [`MAX_NAMES`] asterisk-free names.
///
/// Numbered entries (`1. Name`) win. If there are none, every non-blank line
/// is taken with leading/trailing dashes, asterisks and spaces stripped.
pub fn parse_track_names(content: &str) -> Vec<String> {
    let mut names = numbered_entries(content);
    if names.is_empty() {
        names = bare_lines(content);
    }

    names
        .into_iter()
        .map(|name| name.replace('*', ""))
        .take(MAX_NAMES)
        .collect()
}

fn numbered_entries(content: &str) -> Vec<String> {
    NUMBERED_LINE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

fn bare_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_matches(['-', '*', ' ']).to_string())
        .collect()
}
