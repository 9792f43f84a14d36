//! Integration tests for outline extraction.

use std::collections::HashSet;

use pdfoutline::render::{to_json, JsonFormat};
use pdfoutline::{
    clean_text, extract_outline, BoundingBox, Glyph, HeadingLevel, Line, LineStream,
    MemorySource, OutlineClassifier, OutlineExtractor, OutlineOptions, PageData,
};

/// Lay out a line of text as one glyph per character.
fn text_line(text: &str, top: f64, size: f64) -> Vec<Glyph> {
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let x0 = 72.0 + i as f64 * size * 0.5;
            Glyph::new(
                BoundingBox::new(x0, top, x0 + size * 0.5, top + size),
                c.to_string(),
                size,
            )
        })
        .collect()
}

fn page(lines: &[(&str, f64)]) -> PageData {
    let mut glyphs = Vec::new();
    let mut top = 60.0;
    for (text, size) in lines {
        glyphs.extend(text_line(text, top, *size));
        top += size * 2.0;
    }
    PageData::with_glyphs(glyphs)
}

fn line(text: &str, size: f64, page: u32) -> Line {
    Line::new(text, size, page, 0.0)
}

fn sample_document() -> MemorySource {
    MemorySource::from_pages(vec![
        page(&[
            ("Understanding Outlines", 24.0),
            ("A Field Guide", 24.0),
            ("Prepared for the review board", 10.0),
        ]),
        page(&[
            ("Table of Contents", 18.0),
            ("1 Introduction .......... 3", 10.0),
            ("2 Background .......... 4", 10.0),
            ("2.1 History .......... 4", 10.0),
        ]),
        page(&[
            ("1 Introduction", 18.0),
            ("This document explains how outlines are inferred.", 10.0),
            ("Motivation", 14.0),
            ("Scope and Limits", 12.0),
        ]),
        page(&[
            ("2 Background", 18.0),
            ("2.1 History", 14.0),
            ("2.1.1 Early Work", 12.0),
            ("Motivation", 14.0),
        ]),
    ])
}

#[test]
fn test_sample_document_outline() {
    let result = extract_outline(&sample_document()).unwrap();

    assert_eq!(result.title, "Understanding Outlines A Field Guide");

    let entries: Vec<(HeadingLevel, &str, u32)> = result
        .outline
        .iter()
        .map(|e| (e.level, e.text.as_str(), e.page))
        .collect();

    assert_eq!(
        entries,
        vec![
            (HeadingLevel::H1, "1 Introduction", 3),
            (HeadingLevel::H2, "Motivation", 3),
            (HeadingLevel::H3, "Scope and Limits", 3),
            (HeadingLevel::H1, "2 Background", 4),
            (HeadingLevel::H2, "2.1 History", 4),
            (HeadingLevel::H3, "2.1.1 Early Work", 4),
        ]
    );
}

#[test]
fn test_toc_page_suppressed() {
    let extractor = OutlineExtractor::default();
    let stream = extractor.aggregate(&sample_document()).unwrap();
    assert!(stream.is_toc_page(2));

    let result = extractor.classify(&stream);
    assert!(result.outline.iter().all(|e| e.page != 2));
    // "Table of Contents" has the H1 size but sits on the TOC page
    assert!(result.find("Table of Contents").is_none());
}

#[test]
fn test_idempotent_classification() {
    let extractor = OutlineExtractor::default();
    let stream = extractor.aggregate(&sample_document()).unwrap();

    let first = to_json(&extractor.classify(&stream), JsonFormat::Pretty).unwrap();
    let second = to_json(&extractor.classify(&stream), JsonFormat::Pretty).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_no_duplicate_texts() {
    let result = extract_outline(&sample_document()).unwrap();
    let mut seen = HashSet::new();
    for entry in &result.outline {
        assert!(seen.insert(entry.text.clone()), "duplicate {}", entry.text);
    }
    // The second "Motivation" (page 4) is dropped in favor of page 3
    assert_eq!(result.find("Motivation").unwrap().page, 3);
}

#[test]
fn test_font_rank_monotonic() {
    let lines = vec![
        line("Title", 30.0, 1),
        line("Alpha", 22.0, 1),
        line("Beta", 16.0, 1),
        line("Gamma", 13.0, 1),
        line("Body text", 10.0, 1),
        line("Delta", 22.0, 2),
        line("Epsilon", 16.0, 2),
    ];
    let stream = LineStream::from_parts(lines.clone(), []);
    let result = OutlineClassifier::new().classify(&stream);

    let size_of = |text: &str| lines.iter().find(|l| l.text == text).unwrap().font_size;
    let min_h1 = result
        .outline
        .iter()
        .filter(|e| e.level == HeadingLevel::H1)
        .map(|e| size_of(&e.text))
        .fold(f64::INFINITY, f64::min);
    let max_h2 = result
        .outline
        .iter()
        .filter(|e| e.level == HeadingLevel::H2)
        .map(|e| size_of(&e.text))
        .fold(f64::NEG_INFINITY, f64::max);

    assert!(min_h1 > max_h2);
    assert_eq!(result.count_level(HeadingLevel::H1), 2);
    assert_eq!(result.count_level(HeadingLevel::H2), 2);
    assert_eq!(result.count_level(HeadingLevel::H3), 1);
}

#[test]
fn test_numbering_precedence() {
    let stream = LineStream::from_parts(
        vec![
            line("Title", 24.0, 1),
            // H1 size but numbered at depth 2
            line("3.2 Overview", 18.0, 1),
            // Body size (no font level) but numbered
            line("3.3 Details", 9.0, 1),
            line("Heading", 18.0, 1),
            line("Sub", 14.0, 1),
            line("Minor", 12.0, 1),
        ],
        [],
    );
    let result = OutlineClassifier::new().classify(&stream);
    assert_eq!(result.find("3.2 Overview").unwrap().level, HeadingLevel::H2);
    assert_eq!(result.find("3.3 Details").unwrap().level, HeadingLevel::H2);
}

#[test]
fn test_table_glyphs_never_in_lines() {
    let mut data = page(&[("Results Summary", 16.0), ("Measured values follow", 10.0)]);
    data.glyphs.extend(text_line("SECRETCELL", 400.0, 10.0));
    let data = data.with_table(BoundingBox::new(50.0, 390.0, 550.0, 420.0));

    let stream = OutlineExtractor::default()
        .aggregate(&MemorySource::from_pages(vec![data]))
        .unwrap();

    assert_eq!(stream.len(), 2);
    assert!(stream.lines.iter().all(|l| !l.text.contains("SECRET")));
}

#[test]
fn test_cleanup_round_trip() {
    assert_eq!(
        clean_text("2.1 Introduction .......... 12"),
        "2.1 Introduction"
    );
    assert_eq!(clean_text("  Plain Heading "), "Plain Heading");
}

#[test]
fn test_exact_text_dedup_boundary() {
    let stream = LineStream::from_parts(
        vec![
            line("Report", 18.0, 1),
            line("2. Background", 14.0, 1),
            line("Background", 14.0, 1),
        ],
        [],
    );
    let result = OutlineClassifier::new().classify(&stream);

    assert_eq!(result.title, "Report");
    assert_eq!(result.outline.len(), 2);
    // Numbered: one period in the text gives depth 2
    assert_eq!(result.outline[0].text, "2. Background");
    assert_eq!(result.outline[0].level, HeadingLevel::H2);
    // Different string, so it is kept and classified by font rank
    assert_eq!(result.outline[1].text, "Background");
    assert_eq!(result.outline[1].level, HeadingLevel::H1);
}

#[test]
fn test_long_numbered_line_skipped() {
    let words: Vec<String> = (1..=19).map(|i| format!("word{}", i)).collect();
    let text = format!("4.2 {}", words.join(" "));
    let stream = LineStream::from_parts(vec![line("Title", 20.0, 1), line(&text, 14.0, 1)], []);

    let result = OutlineClassifier::new().classify(&stream);
    assert!(result.outline.is_empty());
}

#[test]
fn test_empty_document_json() {
    let result = extract_outline(&MemorySource::new()).unwrap();
    let json = to_json(&result, JsonFormat::Compact).unwrap();
    assert_eq!(json, r#"{"title":"","outline":[]}"#);
}

#[test]
fn test_ocr_page_in_mixed_document() {
    let source = MemorySource::from_pages(vec![
        page(&[("Scanned Archive", 20.0), ("Introduction", 14.0)]),
        PageData::scanned("3 Findings\nplain scanned sentence"),
    ]);
    let stream = OutlineExtractor::new(OutlineOptions::new().with_ocr_font_size(9.0))
        .aggregate(&source)
        .unwrap();

    let ocr: Vec<&Line> = stream.page_lines(2).collect();
    assert_eq!(ocr.len(), 2);
    assert!(ocr.iter().all(|l| l.is_ocr() && l.font_size == 9.0));

    let result = OutlineClassifier::new().classify(&stream);
    assert_eq!(result.title, "Scanned Archive");
    assert_eq!(result.find("3 Findings").unwrap().level, HeadingLevel::H1);
    // 9.0 is the H2 rank, so the scanned sentence is classified too
    assert_eq!(
        result.find("plain scanned sentence").unwrap().level,
        HeadingLevel::H2
    );
}

#[test]
fn test_form_feed_separated_ocr_contents_page() {
    let source = MemorySource::from_pages(vec![
        page(&[("Field Report", 20.0), ("1 Findings", 14.0)]),
        PageData::scanned("Contents\x0c1 Findings 1\r2 Methods 4\x0c3 Results 9\x0c"),
    ]);
    let stream = OutlineExtractor::default().aggregate(&source).unwrap();

    assert_eq!(stream.page_lines(2).count(), 4);
    assert!(stream.is_toc_page(2));

    let result = OutlineClassifier::new().classify(&stream);
    assert!(result.outline.iter().all(|e| e.page != 2));
}
