//! Skip filter: lines that can never become outline entries.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Shortest cleaned text (in characters) that can be a heading.
pub const MIN_HEADING_CHARS: usize = 3;

/// Longest heading, in whitespace-separated words.
pub const MAX_HEADING_WORDS: usize = 15;

static REVISION_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0\.\d+").expect("valid revision regex"));

static BARE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}\.?$").expect("valid year regex"));

/// Why a line was excluded from the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Fewer than three characters after cleanup
    TooShort,
    /// The line sits on a table-of-contents page
    TocPage,
    /// Starts like a revision number ("0.3")
    RevisionNumber,
    /// Just a four-digit year ("2024" or "2024.")
    BareYear,
    /// More than fifteen words
    TooLong,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::TooShort => "too short",
            SkipReason::TocPage => "table of contents page",
            SkipReason::RevisionNumber => "revision number",
            SkipReason::BareYear => "bare year",
            SkipReason::TooLong => "too long",
        };
        f.write_str(reason)
    }
}

/// Decide whether a cleaned line must be skipped, and why.
///
/// Checks run in a fixed order and the first hit wins.
pub fn skip_reason(text: &str, on_toc_page: bool) -> Option<SkipReason> {
    let text = text.trim();
    if text.chars().count() < MIN_HEADING_CHARS {
        return Some(SkipReason::TooShort);
    }
    if on_toc_page {
        return Some(SkipReason::TocPage);
    }
    if REVISION_NUMBER.is_match(text) {
        return Some(SkipReason::RevisionNumber);
    }
    if BARE_YEAR.is_match(text) {
        return Some(SkipReason::BareYear);
    }
    if text.split_whitespace().count() > MAX_HEADING_WORDS {
        return Some(SkipReason::TooLong);
    }
    None
}

/// Check if a cleaned line must be skipped.
pub fn should_skip(text: &str, on_toc_page: bool) -> bool {
    skip_reason(text, on_toc_page).is_some()
}
