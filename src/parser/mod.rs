//! Page parsing: collaborator seam, line aggregation, and TOC detection.

mod dump;
mod layout;
mod options;
mod source;
mod toc;

pub use dump::{GlyphDumpSource, DUMP_EXTENSION};
pub use layout::LineAggregator;
pub use options::{OutlineOptions, DEFAULT_LINE_TOLERANCE, DEFAULT_OCR_FONT_SIZE};
pub use source::{MemorySource, PageData, PageSource};
pub use toc::{is_toc_line, is_toc_page, TOC_LINE_THRESHOLD};
