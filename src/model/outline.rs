//! Outline types: heading levels, entries, and the per-document result.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Heading tier, from most to least prominent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl HeadingLevel {
    /// All levels, in order.
    pub const ALL: [HeadingLevel; 3] = [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3];

    /// Level for a section-number depth ("2" = 1, "2.3" = 2, deeper = H3).
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => None,
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            _ => Some(HeadingLevel::H3),
        }
    }

    /// Level for a font-size rank, where rank 0 is the title size.
    pub fn from_font_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }

    /// Numeric level (1-3).
    pub fn number(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Level name as it appears in output ("H1", "H2", "H3").
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single heading in the inferred outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading level
    pub level: HeadingLevel,
    /// Cleaned heading text (unique within an outline)
    pub text: String,
    /// Page number (1-indexed)
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// Title and heading outline inferred for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineResult {
    /// Document title (empty when none was found)
    pub title: String,
    /// Headings in order of first appearance
    pub outline: Vec<OutlineEntry>,
}

impl OutlineResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if neither a title nor any heading was found.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.outline.is_empty()
    }

    /// Number of entries at the given level.
    pub fn count_level(&self, level: HeadingLevel) -> usize {
        self.outline.iter().filter(|e| e.level == level).count()
    }

    /// Find the first entry with the given text.
    pub fn find(&self, text: &str) -> Option<&OutlineEntry> {
        self.outline.iter().find(|e| e.text == text)
    }
}
