//! Heading text cleanup.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of two or more periods (dotted leaders).
static DOT_LEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").expect("valid leader regex"));

/// Whitespace followed by digits at the end of the text (a page number).
static TRAILING_PAGE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+\d+$").expect("valid page number regex"));

/// Clean a line's text for use as an outline entry.
///
/// Dotted leaders are removed anywhere in the text, then a trailing page
/// number, then surrounding whitespace. The result is also the entry's
/// identity for deduplication.
pub fn clean_text(text: &str) -> String {
    let without_leaders = DOT_LEADER.replace_all(text, "");
    let without_page = TRAILING_PAGE_NUMBER.replace(&without_leaders, "");
    without_page.trim().to_string()
}
