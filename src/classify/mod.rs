//! Outline classification.
//!
//! Turns a complete [`LineStream`] into a title and a deduplicated
//! H1/H2/H3 outline:
//!
//! 1. rank the document's distinct font sizes,
//! 2. recover the title from title-size lines on pages 1 and 2,
//! 3. clean each line, drop it if the skip filter fires, and run the rule
//!    chain (numbering, then font rank) to pick a level,
//! 4. keep the first occurrence of each cleaned text.

mod cleanup;
mod filter;
mod fonts;
mod rules;

pub use cleanup::clean_text;
pub use filter::{should_skip, skip_reason, SkipReason, MAX_HEADING_WORDS, MIN_HEADING_CHARS};
pub use fonts::FontRanking;
pub use rules::{default_rules, ClassificationRule, FontRankRule, NumberingRule};

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::model::{Line, LineStream, OutlineEntry, OutlineResult};

/// Last page whose title-size lines contribute to the title.
pub const TITLE_MAX_PAGE: u32 = 2;

/// Counters collected during one classification run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationStats {
    /// Lines examined
    pub lines: usize,
    /// Lines excluded by the skip filter, per reason
    pub skipped: BTreeMap<SkipReason, usize>,
    /// Outline entries produced, per deciding rule
    pub matched: BTreeMap<&'static str, usize>,
    /// Classified lines dropped because their text was already emitted
    pub duplicates: usize,
    /// Lines no rule could assign a level to
    pub unclassified: usize,
}

impl ClassificationStats {
    /// Total number of skipped lines.
    pub fn total_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    /// Total number of outline entries produced.
    pub fn total_matched(&self) -> usize {
        self.matched.values().sum()
    }
}

/// Classifies a document's lines into a title and heading outline.
pub struct OutlineClassifier {
    rules: Vec<Box<dyn ClassificationRule>>,
}

impl OutlineClassifier {
    /// Create a classifier with the default rule chain.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Create a classifier with a custom rule chain, consulted in order.
    pub fn with_rules(rules: Vec<Box<dyn ClassificationRule>>) -> Self {
        Self { rules }
    }

    /// Names of the rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Classify a complete line stream.
    pub fn classify(&self, stream: &LineStream) -> OutlineResult {
        self.classify_with_stats(stream).0
    }

    /// Classify a complete line stream and report what happened to each line.
    pub fn classify_with_stats(&self, stream: &LineStream) -> (OutlineResult, ClassificationStats) {
        let ranking = FontRanking::from_lines(&stream.lines);
        let title = recover_title(&stream.lines, &ranking);

        let mut stats = ClassificationStats {
            lines: stream.lines.len(),
            ..Default::default()
        };
        let mut outline = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for line in &stream.lines {
            let text = clean_text(&line.text);

            if let Some(reason) = skip_reason(&text, stream.is_toc_page(line.page)) {
                log::trace!("Skipping {:?} on page {}: {}", text, line.page, reason);
                *stats.skipped.entry(reason).or_insert(0) += 1;
                continue;
            }

            let Some((rule, level)) = self
                .rules
                .iter()
                .find_map(|rule| rule.classify(&text, line, &ranking).map(|l| (rule.name(), l)))
            else {
                stats.unclassified += 1;
                continue;
            };

            if seen.contains(&text) {
                stats.duplicates += 1;
                continue;
            }

            *stats.matched.entry(rule).or_insert(0) += 1;
            seen.insert(text.clone());
            outline.push(OutlineEntry::new(level, text, line.page));
        }

        log::debug!(
            "Classified {} lines: {} headings, {} skipped, {} duplicates, {} distinct font sizes",
            stats.lines,
            outline.len(),
            stats.total_skipped(),
            stats.duplicates,
            ranking.len()
        );

        (OutlineResult { title, outline }, stats)
    }
}

impl Default for OutlineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OutlineClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineClassifier")
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// Join the title-size lines of the first pages, in stream order.
///
/// Returns an empty string when the document has no lines. Title lines stay
/// eligible for the outline as well.
pub fn recover_title(lines: &[Line], ranking: &FontRanking) -> String {
    if ranking.is_empty() {
        return String::new();
    }

    lines
        .iter()
        .filter(|line| line.page <= TITLE_MAX_PAGE && ranking.is_title_size(line.font_size))
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
