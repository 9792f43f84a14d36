//! Heading classification rules.
//!
//! The classifier runs an ordered chain of rules over every line that
//! survives the skip filter. The first rule that returns a level decides;
//! later rules are not consulted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{HeadingLevel, Line};

use super::fonts::FontRanking;

/// A single heading detection strategy.
pub trait ClassificationRule: Send + Sync {
    /// Short name used in statistics and logs.
    fn name(&self) -> &'static str;

    /// Level for a line, or `None` if this rule does not apply.
    ///
    /// `text` is the cleaned line text; `line` is the original line.
    fn classify(&self, text: &str, line: &Line, ranking: &FontRanking) -> Option<HeadingLevel>;
}

/// A leading section number such as `2`, `2.3` or `2.3.1`.
static SECTION_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)*").expect("valid section number regex"));

/// Assigns a level from a leading section number.
///
/// The depth is the number of periods anywhere in the cleaned text plus
/// one, so `3.2 Overview` is H2 and `1.2.3 Scope` is H3.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberingRule;

impl NumberingRule {
    /// Numbering depth of a cleaned text, if it starts with a section number.
    pub fn depth(text: &str) -> Option<usize> {
        let text = text.trim();
        if !SECTION_NUMBER.is_match(text) {
            return None;
        }
        Some(text.matches('.').count() + 1)
    }
}

impl ClassificationRule for NumberingRule {
    fn name(&self) -> &'static str {
        "numbering"
    }

    fn classify(&self, text: &str, _line: &Line, _ranking: &FontRanking) -> Option<HeadingLevel> {
        Self::depth(text).and_then(HeadingLevel::from_depth)
    }
}

/// Assigns a level from the line's font size rank within the document.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontRankRule;

impl ClassificationRule for FontRankRule {
    fn name(&self) -> &'static str {
        "font_rank"
    }

    fn classify(&self, _text: &str, line: &Line, ranking: &FontRanking) -> Option<HeadingLevel> {
        ranking.level_for(line.font_size)
    }
}

/// The default rule chain: numbering first, then font rank.
pub fn default_rules() -> Vec<Box<dyn ClassificationRule>> {
    vec![Box::new(NumberingRule), Box::new(FontRankRule)]
}
