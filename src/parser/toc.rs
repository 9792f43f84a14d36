//! Table-of-contents page detection.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum number of TOC-style lines for a page to count as a TOC page.
pub const TOC_LINE_THRESHOLD: usize = 3;

/// `<number[.number...]> <text> <trailing page number>`
static TOC_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(\.\d+)*)\s+.+\s+\d+$").expect("valid TOC regex"));

/// Check if a single raw line looks like a table-of-contents entry.
pub fn is_toc_line(text: &str) -> bool {
    TOC_LINE.is_match(text)
}

/// Vote on whether a page is a table of contents.
///
/// Takes the page's raw (uncleaned) line texts. The page is a TOC page when
/// at least [`TOC_LINE_THRESHOLD`] of them match the TOC entry pattern.
pub fn is_toc_page<S: AsRef<str>>(lines: &[S]) -> bool {
    lines
        .iter()
        .filter(|line| is_toc_line(line.as_ref()))
        .take(TOC_LINE_THRESHOLD)
        .count()
        >= TOC_LINE_THRESHOLD
}
