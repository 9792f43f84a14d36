//! Line aggregation for outline inference.
//!
//! This module turns a page's positioned glyphs into text lines with an
//! average font size, dropping glyphs that sit inside detected tables. Pages
//! without a text layer fall back to the OCR text supplied by the source.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::{Glyph, Line, PageLines, TableRegion};

use super::options::OutlineOptions;
use super::source::PageSource;
use super::toc::is_toc_page;

/// Groups glyphs into lines, one page at a time.
#[derive(Debug, Clone)]
pub struct LineAggregator {
    /// Vertical bucket width
    tolerance: u32,
    /// Font size given to OCR lines
    ocr_font_size: f64,
}

impl LineAggregator {
    /// Create an aggregator from extraction options.
    ///
    /// Fails with [`Error::InvalidOption`](crate::Error::InvalidOption) if the
    /// options do not validate.
    pub fn new(options: &OutlineOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            tolerance: options.line_tolerance,
            ocr_font_size: options.ocr_default_font_size,
        })
    }

    /// Vertical bucket width in use.
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// Aggregate one page (1-indexed) from the source.
    pub fn aggregate_page(&self, source: &dyn PageSource, page: u32) -> Result<PageLines> {
        let glyphs = source.glyphs(page)?;

        let lines = if glyphs.is_empty() {
            let text = source.ocr_text(page)?;
            let lines = self.ocr_lines(&text, page);
            log::debug!(
                "Page {}: no text layer, {} lines from OCR fallback",
                page,
                lines.len()
            );
            lines
        } else {
            let tables = source.tables(page)?;
            let glyph_count = glyphs.len();
            let lines = self.glyph_lines(glyphs, &tables, page);
            log::debug!(
                "Page {}: {} glyphs, {} tables, {} lines",
                page,
                glyph_count,
                tables.len(),
                lines.len()
            );
            lines
        };

        let raw_texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        let is_toc = is_toc_page(&raw_texts);
        if is_toc {
            log::debug!("Page {}: recognized as table of contents", page);
        }

        Ok(PageLines {
            page,
            lines,
            is_toc,
        })
    }

    /// Build lines from glyphs, skipping glyphs enclosed by a table.
    ///
    /// Glyphs are bucketed by their quantized top coordinate, ordered left to
    /// right within a bucket, and concatenated without separators. Buckets
    /// whose text is blank are dropped.
    pub fn glyph_lines(&self, glyphs: Vec<Glyph>, tables: &[TableRegion], page: u32) -> Vec<Line> {
        let mut buckets: BTreeMap<i64, Vec<Glyph>> = BTreeMap::new();
        let mut dropped = 0usize;

        for glyph in glyphs {
            if glyph.is_inside_any(tables) {
                dropped += 1;
                continue;
            }
            buckets
                .entry(self.bucket_index(glyph.top))
                .or_default()
                .push(glyph);
        }

        if dropped > 0 {
            log::trace!("Page {}: {} glyphs inside tables dropped", page, dropped);
        }

        buckets
            .into_iter()
            .filter_map(|(index, mut bucket)| {
                bucket.sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal));

                let text: String = bucket.iter().map(|g| g.text.as_str()).collect();
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }

                let total: f64 = bucket.iter().map(|g| g.size).sum();
                let font_size = round_to_hundredths(total / bucket.len() as f64);
                let offset = index as f64 * self.tolerance as f64;

                Some(Line::new(text, font_size, page, offset))
            })
            .collect()
    }

    /// Build lines from OCR output: non-empty trimmed lines, in order.
    ///
    /// Besides `\n` and `\r\n`, a lone `\r`, form feed, vertical tab and the
    /// Unicode line and paragraph separators all end a line.
    pub fn ocr_lines(&self, text: &str, page: u32) -> Vec<Line> {
        text.split(is_line_boundary)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Line::from_ocr(line, self.ocr_font_size, page))
            .collect()
    }

    /// Quantized bucket for a top coordinate.
    ///
    /// Ties round to even, so with a tolerance of 2 a top of 3.0 and 5.0
    /// both land on 4.0.
    fn bucket_index(&self, top: f64) -> i64 {
        (top / self.tolerance as f64).round_ties_even() as i64
    }
}

/// Characters that end a line of OCR text.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Round to 2 decimal places, ties to even.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoundingBox;
    use crate::parser::source::{MemorySource, PageData};

    fn glyph(text: &str, x0: f64, top: f64, size: f64) -> Glyph {
        Glyph::new(BoundingBox::new(x0, top, x0 + 5.0, top + size), text, size)
    }

    fn word(text: &str, x0: f64, top: f64, size: f64) -> Vec<Glyph> {
        text.chars()
            .enumerate()
            .map(|(i, c)| glyph(&c.to_string(), x0 + i as f64 * 5.0, top, size))
            .collect()
    }

    fn aggregator() -> LineAggregator {
        LineAggregator::new(&OutlineOptions::default()).unwrap()
    }

    #[test]
    fn test_groups_by_quantized_top() {
        // Tops 100.0 and 100.8 share a bucket; 120.0 is its own line
        let mut glyphs = word("Hel", 10.0, 100.0, 12.0);
        glyphs.extend(word("lo", 25.0, 100.8, 12.0));
        glyphs.extend(word("World", 10.0, 120.0, 12.0));

        let lines = aggregator().glyph_lines(glyphs, &[], 1);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "Hello");
        assert_eq!(lines[1].text, "World");
        assert_eq!(lines[0].vertical_offset, Some(100.0));
        assert_eq!(lines[1].vertical_offset, Some(120.0));
    }

    #[test]
    fn test_orders_left_to_right() {
        let glyphs = vec![
            glyph("c", 30.0, 50.0, 10.0),
            glyph("a", 10.0, 50.0, 10.0),
            glyph("b", 20.0, 50.0, 10.0),
        ];
        let lines = aggregator().glyph_lines(glyphs, &[], 1);
        assert_eq!(lines[0].text, "abc");
    }

    #[test]
    fn test_lines_in_vertical_order() {
        let mut glyphs = word("Bottom", 10.0, 700.0, 10.0);
        glyphs.extend(word("Top", 10.0, 40.0, 10.0));
        let lines = aggregator().glyph_lines(glyphs, &[], 1);
        assert_eq!(lines[0].text, "Top");
        assert_eq!(lines[1].text, "Bottom");
    }

    #[test]
    fn test_ties_round_to_even() {
        let agg = aggregator();
        assert_eq!(agg.bucket_index(3.0), 2);
        assert_eq!(agg.bucket_index(5.0), 2);
        assert_eq!(agg.bucket_index(1.0), 0);
    }

    #[test]
    fn test_average_font_size_rounded() {
        let glyphs = vec![
            glyph("a", 10.0, 50.0, 10.0),
            glyph("b", 15.0, 50.0, 10.0),
            glyph("c", 20.0, 50.0, 11.0),
        ];
        let lines = aggregator().glyph_lines(glyphs, &[], 1);
        assert_eq!(lines[0].font_size, 10.33);
    }

    #[test]
    fn test_average_font_size_tie_rounds_to_even() {
        // Mean is exactly 10.125
        let glyphs = vec![glyph("A", 10.0, 50.0, 10.0), glyph("b", 15.0, 50.0, 10.25)];
        let lines = aggregator().glyph_lines(glyphs, &[], 1);
        assert_eq!(lines[0].font_size, 10.12);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let options = OutlineOptions::new().with_line_tolerance(0);
        assert!(matches!(
            LineAggregator::new(&options),
            Err(crate::error::Error::InvalidOption(_))
        ));
    }

    #[test]
    fn test_table_glyphs_excluded() {
        let mut glyphs = word("Heading", 10.0, 50.0, 14.0);
        glyphs.extend(word("Cell", 110.0, 210.0, 10.0));
        let table = BoundingBox::new(100.0, 200.0, 300.0, 400.0);

        let lines = aggregator().glyph_lines(glyphs, &[table], 1);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Heading");
    }

    #[test]
    fn test_partially_covered_glyph_kept() {
        // Straddles the table's left edge
        let glyphs = vec![glyph("X", 98.0, 210.0, 10.0)];
        let table = BoundingBox::new(100.0, 200.0, 300.0, 400.0);
        let lines = aggregator().glyph_lines(glyphs, &[table], 1);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let glyphs = vec![glyph(" ", 10.0, 50.0, 10.0), glyph(" ", 15.0, 50.0, 10.0)];
        assert!(aggregator().glyph_lines(glyphs, &[], 1).is_empty());
    }

    #[test]
    fn test_ocr_lines() {
        let agg = LineAggregator::new(&OutlineOptions::new().with_ocr_font_size(11.0)).unwrap();
        let lines = agg.ocr_lines("  First line \n\n   \nSecond line\n", 3);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "First line");
        assert_eq!(lines[1].text, "Second line");
        assert!(lines.iter().all(|l| l.font_size == 11.0 && l.page == 3 && l.is_ocr()));
    }

    #[test]
    fn test_ocr_lines_split_on_all_line_boundaries() {
        let lines = aggregator().ocr_lines("1 Intro\r2 Methods\x0c3 Results\u{2028}4 Notes\x0b", 1);
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["1 Intro", "2 Methods", "3 Results", "4 Notes"]);
    }

    #[test]
    fn test_aggregate_page_ocr_fallback_and_toc() {
        let source = MemorySource::from_pages(vec![PageData::scanned(
            "Contents\n1 Introduction 2\n2 Methods 4\n3 Results 9",
        )]);
        let page = aggregator().aggregate_page(&source, 1).unwrap();
        assert_eq!(page.lines.len(), 4);
        assert!(page.is_toc);
    }

    #[test]
    fn test_all_glyphs_in_tables_does_not_fall_back() {
        let page = PageData {
            glyphs: word("Cell", 110.0, 210.0, 10.0),
            tables: vec![BoundingBox::new(100.0, 200.0, 300.0, 400.0)],
            ocr_text: Some("Should not be used".to_string()),
        };
        let source = MemorySource::from_pages(vec![page]);
        let page = aggregator().aggregate_page(&source, 1).unwrap();
        assert!(page.lines.is_empty());
        assert!(!page.is_toc);
    }

    #[test]
    fn test_empty_page_yields_no_lines() {
        let source = MemorySource::from_pages(vec![PageData::default()]);
        let page = aggregator().aggregate_page(&source, 1).unwrap();
        assert!(page.lines.is_empty());
    }
}
