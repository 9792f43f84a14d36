//! Glyph dump files: page content exported by an external PDF tool.
//!
//! A dump is a JSON document of the form
//! `{"pages": [{"glyphs": [{"x0", "top", "x1", "bottom", "text", "size"}],
//! "tables": [{"x0", "top", "x1", "bottom"}], "ocr_text": "..."}]}`.
//! Pages are numbered by their position, starting at 1.

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{BoundingBox, Glyph};

use super::source::{MemorySource, PageSource};

/// File extension of glyph dumps.
pub const DUMP_EXTENSION: &str = "json";

/// A page source loaded from a glyph dump.
#[derive(Debug, Clone)]
pub struct GlyphDumpSource {
    inner: MemorySource,
}

impl GlyphDumpSource {
    /// Open a glyph dump file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        Self::from_bytes(&data).map_err(|e| match e {
            Error::InvalidDump(msg) => Error::InvalidDump(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Load a glyph dump from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let inner: MemorySource =
            serde_json::from_slice(data).map_err(|e| Error::InvalidDump(e.to_string()))?;
        log::debug!("Loaded glyph dump with {} pages", inner.pages.len());
        Ok(Self { inner })
    }

    /// Load a glyph dump from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Get the underlying in-memory pages.
    pub fn pages(&self) -> &MemorySource {
        &self.inner
    }
}

impl PageSource for GlyphDumpSource {
    fn page_count(&self) -> Result<u32> {
        self.inner.page_count()
    }

    fn glyphs(&self, page: u32) -> Result<Vec<Glyph>> {
        self.inner.glyphs(page)
    }

    fn tables(&self, page: u32) -> Result<Vec<BoundingBox>> {
        self.inner.tables(page)
    }

    fn ocr_text(&self, page: u32) -> Result<String> {
        self.inner.ocr_text(page)
    }
}
