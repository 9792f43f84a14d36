//! Outline extraction options and configuration.

use crate::error::{Error, Result};

/// Default vertical bucket width for grouping glyphs into lines.
pub const DEFAULT_LINE_TOLERANCE: u32 = 2;

/// Default font size assigned to OCR-derived lines.
pub const DEFAULT_OCR_FONT_SIZE: f64 = 10.0;

/// Options for extracting an outline.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineOptions {
    /// Vertical quantization bucket width for line grouping (> 0)
    pub line_tolerance: u32,

    /// Synthetic font size for OCR lines, which carry no size information
    pub ocr_default_font_size: f64,

    /// Whether batch runs may process documents in parallel
    pub parallel: bool,
}

impl OutlineOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set line tolerance.
    pub fn with_line_tolerance(mut self, tolerance: u32) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the font size assigned to OCR lines.
    pub fn with_ocr_font_size(mut self, size: f64) -> Self {
        self.ocr_default_font_size = size;
        self
    }

    /// Enable or disable parallel batch processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check that every option is within its valid range.
    pub fn validate(&self) -> Result<()> {
        if self.line_tolerance == 0 {
            return Err(Error::InvalidOption(
                "line_tolerance must be greater than 0".to_string(),
            ));
        }
        if !self.ocr_default_font_size.is_finite() || self.ocr_default_font_size <= 0.0 {
            return Err(Error::InvalidOption(format!(
                "ocr_default_font_size must be a positive number, got {}",
                self.ocr_default_font_size
            )));
        }
        Ok(())
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            line_tolerance: DEFAULT_LINE_TOLERANCE,
            ocr_default_font_size: DEFAULT_OCR_FONT_SIZE,
            parallel: true,
        }
    }
}
