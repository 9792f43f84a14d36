//! Batch processing of a directory of glyph dumps.
//!
//! Every input produces one `<stem>.json` outline next to the others in the
//! output directory. A document that fails is reported and skipped; it never
//! stops the rest of the batch. Documents share no state, so they may run in
//! parallel.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::parser::{GlyphDumpSource, OutlineOptions, DUMP_EXTENSION};
use crate::pipeline::OutlineExtractor;
use crate::render::{to_json, JsonFormat};

/// A document that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// Input file
    pub input: PathBuf,
    /// Error message
    pub error: String,
}

/// Result of processing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// The outline was written.
    Written {
        /// Input file
        input: PathBuf,
        /// Output file
        output: PathBuf,
        /// Number of outline entries
        headings: usize,
    },
    /// The document failed.
    Failed(BatchFailure),
}

impl DocumentOutcome {
    /// Input file of this outcome.
    pub fn input(&self) -> &Path {
        match self {
            DocumentOutcome::Written { input, .. } => input,
            DocumentOutcome::Failed(failure) => &failure.input,
        }
    }

    /// Check if the document was processed successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, DocumentOutcome::Written { .. })
    }
}

/// Outcomes of a batch run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// One outcome per input
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchReport {
    /// Number of documents written.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Documents that failed.
    pub fn failures(&self) -> Vec<&BatchFailure> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                DocumentOutcome::Failed(failure) => Some(failure),
                _ => None,
            })
            .collect()
    }

    /// Check if every document succeeded.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(DocumentOutcome::is_success)
    }
}

/// Extracts outlines for many documents.
#[derive(Debug, Default)]
pub struct BatchProcessor {
    extractor: OutlineExtractor,
    format: JsonFormat,
}

impl BatchProcessor {
    /// Create a batch processor with the given options.
    pub fn new(options: OutlineOptions) -> Self {
        Self {
            extractor: OutlineExtractor::new(options),
            format: JsonFormat::Pretty,
        }
    }

    /// Set the JSON format of written outlines.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// List the glyph dumps in a directory, sorted by path.
    pub fn collect_inputs(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut inputs = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && has_dump_extension(&path) {
                inputs.push(path);
            }
        }
        inputs.sort();
        Ok(inputs)
    }

    /// Output path for an input: `<output_dir>/<stem>.json`.
    pub fn output_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
        let stem = input
            .file_stem()
            .ok_or_else(|| Error::Other(format!("No file name: {}", input.display())))?;
        let mut name = stem.to_os_string();
        name.push(".json");
        Ok(output_dir.join(name))
    }

    /// Extract and write the outline of one document.
    pub fn process_document(&self, input: &Path, output_dir: &Path) -> Result<(PathBuf, usize)> {
        let output = Self::output_path(input, output_dir)?;
        if output.exists() && fs::canonicalize(&output)? == fs::canonicalize(input)? {
            return Err(Error::Other(format!(
                "Output would overwrite input: {}",
                input.display()
            )));
        }

        let source = GlyphDumpSource::open(input)?;
        let result = self.extractor.extract(&source)?;
        let json = to_json(&result, self.format)?;
        fs::write(&output, json)?;

        Ok((output, result.outline.len()))
    }

    /// Process the given inputs, calling `progress` as each one finishes.
    ///
    /// Fails only if the output directory cannot be created; per-document
    /// errors are collected in the report.
    pub fn run<F>(&self, inputs: &[PathBuf], output_dir: &Path, progress: F) -> Result<BatchReport>
    where
        F: Fn(&DocumentOutcome) + Sync,
    {
        fs::create_dir_all(output_dir)?;

        let process = |input: &PathBuf| {
            let outcome = match self.process_document(input, output_dir) {
                Ok((output, headings)) => {
                    log::info!("Processed {} ({} headings)", input.display(), headings);
                    DocumentOutcome::Written {
                        input: input.clone(),
                        output,
                        headings,
                    }
                }
                Err(e) => {
                    log::error!("Failed to process {}: {}", input.display(), e);
                    DocumentOutcome::Failed(BatchFailure {
                        input: input.clone(),
                        error: e.to_string(),
                    })
                }
            };
            progress(&outcome);
            outcome
        };

        let outcomes: Vec<DocumentOutcome> = if self.extractor.options().parallel {
            inputs.par_iter().map(process).collect()
        } else {
            inputs.iter().map(process).collect()
        };

        Ok(BatchReport { outcomes })
    }

    /// Process every glyph dump in `input_dir` into `output_dir`.
    pub fn process_directory(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
        let inputs = self.collect_inputs(input_dir)?;
        log::debug!(
            "Found {} glyph dumps in {}",
            inputs.len(),
            input_dir.display()
        );
        self.run(&inputs, output_dir, |_| {})
    }
}

fn has_dump_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(DUMP_EXTENSION))
        .unwrap_or(false)
}
