//! Positioned glyphs and table regions supplied by the page source.

use serde::{Deserialize, Serialize};

/// An axis-aligned box in page coordinates (top-down y axis).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f64,
    /// Top edge
    pub top: f64,
    /// Right edge
    pub x1: f64,
    /// Bottom edge
    pub bottom: f64,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// Check if `other` lies entirely within this box (all four edges, inclusive).
    pub fn encloses(&self, other: &BoundingBox) -> bool {
        other.x0 >= self.x0
            && other.x1 <= self.x1
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A detected table on a page. Glyphs enclosed by it are not part of any line.
pub type TableRegion = BoundingBox;

/// A single rendered character with its box and font size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Left edge
    pub x0: f64,
    /// Top edge
    pub top: f64,
    /// Right edge
    pub x1: f64,
    /// Bottom edge
    pub bottom: f64,
    /// Rendered text (usually a single character)
    pub text: String,
    /// Font size in points
    pub size: f64,
}

impl Glyph {
    /// Create a glyph from its box, text, and font size.
    pub fn new(bbox: BoundingBox, text: impl Into<String>, size: f64) -> Self {
        Self {
            x0: bbox.x0,
            top: bbox.top,
            x1: bbox.x1,
            bottom: bbox.bottom,
            text: text.into(),
            size,
        }
    }

    /// Get the glyph's bounding box.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.x0, self.top, self.x1, self.bottom)
    }

    /// Check if the glyph is fully enclosed by any of the given tables.
    pub fn is_inside_any(&self, tables: &[TableRegion]) -> bool {
        let bbox = self.bbox();
        tables.iter().any(|table| table.encloses(&bbox))
    }
}
