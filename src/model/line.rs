//! Reconstructed text lines and the document-wide line stream.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One reconstructed row of text on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Line text (glyphs concatenated left to right, trimmed)
    pub text: String,

    /// Average glyph font size, rounded to 2 decimal places
    pub font_size: f64,

    /// Page number (1-indexed)
    pub page: u32,

    /// Quantized top coordinate; absent for OCR-derived lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_offset: Option<f64>,
}

impl Line {
    /// Create a line with a known vertical position.
    pub fn new(text: impl Into<String>, font_size: f64, page: u32, vertical_offset: f64) -> Self {
        Self {
            text: text.into(),
            font_size,
            page,
            vertical_offset: Some(vertical_offset),
        }
    }

    /// Create a line recovered by OCR (no vertical position).
    pub fn from_ocr(text: impl Into<String>, font_size: f64, page: u32) -> Self {
        Self {
            text: text.into(),
            font_size,
            page,
            vertical_offset: None,
        }
    }

    /// Check if the line came from the OCR fallback.
    pub fn is_ocr(&self) -> bool {
        self.vertical_offset.is_none()
    }
}

/// The lines of a single page plus its table-of-contents vote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLines {
    /// Page number (1-indexed)
    pub page: u32,
    /// Lines in top-to-bottom order
    pub lines: Vec<Line>,
    /// Whether the page was recognized as a table of contents
    pub is_toc: bool,
}

/// Every line of a document in page-then-vertical order.
///
/// This is the typed hand-off between aggregation and classification:
/// font ranking needs the complete set, so a stream is only classified
/// once all pages have been pushed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineStream {
    /// All lines, in document order
    pub lines: Vec<Line>,

    /// Pages recognized as table-of-contents pages
    #[serde(default)]
    pub toc_pages: BTreeSet<u32>,
}

impl LineStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stream from lines and a set of TOC pages.
    pub fn from_parts(lines: Vec<Line>, toc_pages: impl IntoIterator<Item = u32>) -> Self {
        Self {
            lines,
            toc_pages: toc_pages.into_iter().collect(),
        }
    }

    /// Append one aggregated page.
    pub fn push_page(&mut self, page: PageLines) {
        if page.is_toc {
            self.toc_pages.insert(page.page);
        }
        self.lines.extend(page.lines);
    }

    /// Check if a page was recognized as a table of contents.
    pub fn is_toc_page(&self, page: u32) -> bool {
        self.toc_pages.contains(&page)
    }

    /// Number of lines in the stream.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the stream has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines of one page.
    pub fn page_lines(&self, page: u32) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |line| line.page == page)
    }
}
