//! Page sources: the external glyph, table, and OCR collaborators.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{BoundingBox, Glyph};

/// Supplies raw page content to the line aggregator.
///
/// Implement this trait to plug in a native text-layer parser, a table
/// detector, and an OCR engine. The aggregator requests each page once, in
/// page order. `tables` is only requested for pages that have glyphs and
/// `ocr_text` only for pages that have none.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> Result<u32>;

    /// Positioned glyphs of a page (1-indexed). Empty means "no text layer".
    fn glyphs(&self, page: u32) -> Result<Vec<Glyph>>;

    /// Table bounding boxes detected on a page.
    fn tables(&self, page: u32) -> Result<Vec<BoundingBox>>;

    /// OCR text of the rendered page, one physical line per text line.
    ///
    /// The default returns no text, for sources without an OCR engine.
    fn ocr_text(&self, page: u32) -> Result<String> {
        let _ = page;
        Ok(String::new())
    }
}

/// Raw content of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    /// Native text layer glyphs
    #[serde(default)]
    pub glyphs: Vec<Glyph>,

    /// Detected table regions
    #[serde(default)]
    pub tables: Vec<BoundingBox>,

    /// Pre-computed OCR output, used when the page has no glyphs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,
}

impl PageData {
    /// Create a page from its glyphs.
    pub fn with_glyphs(glyphs: Vec<Glyph>) -> Self {
        Self {
            glyphs,
            ..Self::default()
        }
    }

    /// Create a scanned page that only has OCR text.
    pub fn scanned(ocr_text: impl Into<String>) -> Self {
        Self {
            ocr_text: Some(ocr_text.into()),
            ..Self::default()
        }
    }

    /// Add a table region.
    pub fn with_table(mut self, table: BoundingBox) -> Self {
        self.tables.push(table);
        self
    }
}

/// A page source backed by pages held in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemorySource {
    /// Pages in document order
    pub pages: Vec<PageData>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source from pages.
    pub fn from_pages(pages: Vec<PageData>) -> Self {
        Self { pages }
    }

    /// Add a page.
    pub fn add_page(&mut self, page: PageData) {
        self.pages.push(page);
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page: u32) -> Result<&PageData> {
        if page == 0 {
            return Err(Error::PageOutOfRange(page, self.pages.len() as u32));
        }
        self.pages
            .get((page - 1) as usize)
            .ok_or(Error::PageOutOfRange(page, self.pages.len() as u32))
    }
}

impl PageSource for MemorySource {
    fn page_count(&self) -> Result<u32> {
        Ok(self.pages.len() as u32)
    }

    fn glyphs(&self, page: u32) -> Result<Vec<Glyph>> {
        Ok(self.get_page(page)?.glyphs.clone())
    }

    fn tables(&self, page: u32) -> Result<Vec<BoundingBox>> {
        Ok(self.get_page(page)?.tables.clone())
    }

    fn ocr_text(&self, page: u32) -> Result<String> {
        Ok(self.get_page(page)?.ocr_text.clone().unwrap_or_default())
    }
}
