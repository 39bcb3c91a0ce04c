//! Text measurement.
//!
//! The layout search only needs the bounding box of a block of text at a
//! given pixel size. `TextMeasurer` abstracts that so the search can run
//! against real font metrics or the fixed-ratio heuristic below.

use crate::card::CardError;

/// Bounding box of a measured block, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Width/height measurement of `\n`-separated text blocks.
pub trait TextMeasurer: Send + Sync {
    /// Advance width of a single line at `font_size` pixels.
    fn line_width(&self, line: &str, font_size: u32) -> f32;

    /// Distance between consecutive baselines at `font_size` pixels.
    fn line_height(&self, font_size: u32) -> f32;

    /// Bounding box of a block. Empty text measures as zero.
    fn measure(&self, text: &str, font_size: u32) -> Result<TextExtent, CardError> {
        if font_size == 0 {
            return Err(CardError::Measurement("font size must be positive".to_string()));
        }
        if text.is_empty() {
            return Ok(TextExtent::default());
        }

        let mut width = 0.0_f32;
        let mut lines = 0u32;
        for line in text.split('\n') {
            width = width.max(self.line_width(line, font_size));
            lines += 1;
        }
        let extent = TextExtent {
            width,
            height: lines as f32 * self.line_height(font_size),
        };

        if !extent.width.is_finite() || !extent.height.is_finite() {
            return Err(CardError::Measurement(format!(
                "non-finite extent for {} chars at {font_size}px",
                text.chars().count()
            )));
        }
        Ok(extent)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Heuristic metrics
// ────────────────────────────────────────────────────────────────────────────

/// Fixed-ratio metrics: every character is `avg_char_width` em wide and every
/// line `line_height` em tall. Used when no outline font could be loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMetrics {
    pub avg_char_width: f32,
    pub line_height: f32,
}

impl Default for HeuristicMetrics {
    fn default() -> Self {
        Self {
            avg_char_width: 0.55,
            line_height: 1.2,
        }
    }
}

impl TextMeasurer for HeuristicMetrics {
    fn line_width(&self, line: &str, font_size: u32) -> f32 {
        line.chars().count() as f32 * self.avg_char_width * font_size as f32
    }

    fn line_height(&self, font_size: u32) -> f32 {
        self.line_height * font_size as f32
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
