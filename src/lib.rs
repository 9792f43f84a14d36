//! # pdfoutline
//!
//! Infer a document title and an H1/H2/H3 heading outline from the
//! positioned text of a paginated document.
//!
//! Glyph extraction, table detection, and OCR are external: they plug in
//! through the [`PageSource`] trait. This crate groups glyphs into lines and
//! classifies those lines using font-size rank, section numbering,
//! table-of-contents suppression, and title recovery.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{extract_outline_file, render};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     // Load a glyph dump exported by an external PDF tool
//!     let outline = extract_outline_file("report.json")?;
//!
//!     // Serialize to JSON
//!     let json = render::to_json(&outline, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Line aggregation**: glyphs are bucketed by quantized top coordinate,
//!   glyphs inside tables are dropped, pages without a text layer use OCR
//! - **Classification**: runs once over the whole document, since heading
//!   levels depend on the document's complete set of font sizes
//! - **Batch processing**: one outline per input, failures isolated per
//!   document, documents processed in parallel with Rayon

pub mod batch;
pub mod classify;
pub mod error;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
pub use batch::{BatchFailure, BatchProcessor, BatchReport, DocumentOutcome};
pub use classify::{
    clean_text, ClassificationRule, ClassificationStats, FontRankRule, FontRanking,
    NumberingRule, OutlineClassifier, SkipReason,
};
pub use error::{Error, Result};
pub use model::{
    BoundingBox, Glyph, HeadingLevel, Line, LineStream, OutlineEntry, OutlineResult, PageLines,
    TableRegion,
};
pub use parser::{
    GlyphDumpSource, LineAggregator, MemorySource, OutlineOptions, PageData, PageSource,
};
pub use pipeline::OutlineExtractor;
pub use render::JsonFormat;

use std::path::Path;

/// Extract the outline of a document from a page source.
///
/// # Example
///
/// ```
/// use pdfoutline::{extract_outline, MemorySource, PageData};
///
/// let source = MemorySource::from_pages(vec![PageData::scanned("1 Introduction")]);
/// let outline = extract_outline(&source).unwrap();
/// assert_eq!(outline.outline[0].text, "1 Introduction");
/// ```
pub fn extract_outline(source: &dyn PageSource) -> Result<OutlineResult> {
    OutlineExtractor::default().extract(source)
}

/// Extract the outline of a document with custom options.
///
/// # Example
///
/// ```
/// use pdfoutline::{extract_outline_with_options, MemorySource, OutlineOptions};
///
/// let options = OutlineOptions::new().with_line_tolerance(3);
/// let outline = extract_outline_with_options(&MemorySource::new(), options).unwrap();
/// assert!(outline.is_empty());
/// ```
pub fn extract_outline_with_options(
    source: &dyn PageSource,
    options: OutlineOptions,
) -> Result<OutlineResult> {
    OutlineExtractor::new(options).extract(source)
}

/// Extract the outline of a glyph dump file.
///
/// # Arguments
///
/// * `path` - Path to the glyph dump (JSON)
///
/// # Example
///
/// ```no_run
/// use pdfoutline::extract_outline_file;
///
/// let outline = extract_outline_file("report.json").unwrap();
/// println!("{} headings", outline.outline.len());
/// ```
pub fn extract_outline_file<P: AsRef<Path>>(path: P) -> Result<OutlineResult> {
    extract_outline_file_with_options(path, OutlineOptions::default())
}

/// Extract the outline of a glyph dump file with custom options.
pub fn extract_outline_file_with_options<P: AsRef<Path>>(
    path: P,
    options: OutlineOptions,
) -> Result<OutlineResult> {
    let source = GlyphDumpSource::open(path)?;
    extract_outline_with_options(&source, options)
}

/// Aggregate a glyph dump file into its line stream, without classifying.
pub fn aggregate_file<P: AsRef<Path>>(path: P, options: OutlineOptions) -> Result<LineStream> {
    let source = GlyphDumpSource::open(path)?;
    OutlineExtractor::new(options).aggregate(&source)
}
