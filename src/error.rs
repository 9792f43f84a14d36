//! Error types for pdfoutline library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building an outline.
///
/// Missing input (empty pages, no font sizes, no numbering) is never an
/// error; it degrades to an empty title or a shorter outline instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The glyph dump could not be decoded.
    #[error("Invalid glyph dump: {0}")]
    InvalidDump(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// The glyph or table source failed for a page.
    #[error("Page source error on page {page}: {message}")]
    Source {
        /// Page that was being read (1-indexed)
        page: u32,
        /// Collaborator message
        message: String,
    },

    /// The OCR engine failed for a page.
    #[error("OCR error on page {page}: {message}")]
    Ocr {
        /// Page that was being recognized (1-indexed)
        page: u32,
        /// Engine message
        message: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Page the error refers to, if any.
    pub fn page(&self) -> Option<u32> {
        match self {
            Error::PageOutOfRange(page, _) => Some(*page),
            Error::Source { page, .. } | Error::Ocr { page, .. } => Some(*page),
            _ => None,
        }
    }
}
