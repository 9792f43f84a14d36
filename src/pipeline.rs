//! Two-stage outline extraction: aggregate every page, then classify.

use crate::classify::{ClassificationStats, OutlineClassifier};
use crate::error::Result;
use crate::model::{LineStream, OutlineResult};
use crate::parser::{LineAggregator, OutlineOptions, PageSource};

/// Runs line aggregation and outline classification for one document.
///
/// Aggregation must see every page before classification starts, because
/// font ranking needs the complete set of sizes. The [`LineStream`] returned
/// by [`aggregate`](Self::aggregate) is that hand-off.
#[derive(Debug, Default)]
pub struct OutlineExtractor {
    options: OutlineOptions,
    classifier: OutlineClassifier,
}

impl OutlineExtractor {
    /// Create an extractor with the given options.
    pub fn new(options: OutlineOptions) -> Self {
        Self {
            options,
            classifier: OutlineClassifier::new(),
        }
    }

    /// Replace the classifier (for a custom rule chain).
    pub fn with_classifier(mut self, classifier: OutlineClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Get the options in use.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Aggregate all pages of a document, in page order.
    ///
    /// The first page source failure abandons the document; no partial
    /// stream is ever returned.
    pub fn aggregate(&self, source: &dyn PageSource) -> Result<LineStream> {
        let aggregator = LineAggregator::new(&self.options)?;
        let page_count = source.page_count()?;
        let mut stream = LineStream::new();

        for page in 1..=page_count {
            stream.push_page(aggregator.aggregate_page(source, page)?);
        }

        log::debug!(
            "Aggregated {} pages into {} lines ({} TOC pages)",
            page_count,
            stream.len(),
            stream.toc_pages.len()
        );

        Ok(stream)
    }

    /// Classify a complete line stream.
    pub fn classify(&self, stream: &LineStream) -> OutlineResult {
        self.classifier.classify(stream)
    }

    /// Classify a complete line stream, with statistics.
    pub fn classify_with_stats(&self, stream: &LineStream) -> (OutlineResult, ClassificationStats) {
        self.classifier.classify_with_stats(stream)
    }

    /// Aggregate and classify a document.
    pub fn extract(&self, source: &dyn PageSource) -> Result<OutlineResult> {
        let stream = self.aggregate(source)?;
        Ok(self.classify(&stream))
    }
}
