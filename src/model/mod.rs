//! Document model types for outline inference.
//!
//! Glyphs and table regions come from an external page source; lines are
//! produced by the aggregator; outline entries and results are produced by
//! the classifier.

mod glyph;
mod line;
mod outline;

pub use glyph::{BoundingBox, Glyph, TableRegion};
pub use line::{Line, LineStream, PageLines};
pub use outline::{HeadingLevel, OutlineEntry, OutlineResult};
