//! Document-relative font size ranking.

use std::collections::BTreeSet;

use ordered_float::OrderedFloat;

use crate::model::{HeadingLevel, Line};

/// Distinct font sizes of a document, largest first.
///
/// The largest size is the title size; the next three map to H1, H2 and H3.
/// Absolute point sizes play no role, only their rank within the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontRanking {
    sizes: Vec<OrderedFloat<f64>>,
}

impl FontRanking {
    /// Rank the font sizes of a complete set of lines.
    ///
    /// Non-finite sizes are ignored.
    pub fn from_lines(lines: &[Line]) -> Self {
        let distinct: BTreeSet<OrderedFloat<f64>> = lines
            .iter()
            .map(|line| line.font_size)
            .filter(|size| size.is_finite())
            .map(OrderedFloat)
            .collect();

        Self {
            sizes: distinct.into_iter().rev().collect(),
        }
    }

    /// Distinct sizes, largest first.
    pub fn sizes(&self) -> Vec<f64> {
        self.sizes.iter().map(|s| s.into_inner()).collect()
    }

    /// Number of distinct sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Check if no sizes were observed.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The largest font size in the document.
    pub fn title_size(&self) -> Option<f64> {
        self.sizes.first().map(|s| s.into_inner())
    }

    /// Check if a size is exactly the title size.
    pub fn is_title_size(&self, size: f64) -> bool {
        self.sizes.first() == Some(&OrderedFloat(size))
    }

    /// Rank of a size (0 = title size), if it occurs in the document.
    pub fn rank(&self, size: f64) -> Option<usize> {
        let key = OrderedFloat(size);
        self.sizes.iter().position(|s| *s == key)
    }

    /// Heading level for an exact font size.
    ///
    /// Only the 2nd, 3rd and 4th largest sizes map to a level; with fewer
    /// than two distinct sizes nothing does.
    pub fn level_for(&self, size: f64) -> Option<HeadingLevel> {
        self.rank(size).and_then(HeadingLevel::from_font_rank)
    }

    /// The font size that maps to a heading level, if any.
    pub fn size_for(&self, level: HeadingLevel) -> Option<f64> {
        self.sizes
            .get(level.number() as usize)
            .map(|s| s.into_inner())
    }
}
