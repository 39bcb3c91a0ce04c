//! Shrink-to-fit font search and block placement.
//!
//! # Search
//! A monotone linear scan from `box_width / 14` down to `min_font_size` in
//! steps of `font_step`. Each candidate wraps the text to a column derived
//! from the average glyph width, measures the quote block, the author line
//! and the spacer between them, and is accepted the first time the stack
//! fits the box height. When no candidate fits, the last evaluated one (the
//! smallest) is returned with `fits == false`; overflow is accepted, never an
//! error.
//!
//! The scan performs at most `(initial - min) / step + 1` evaluations.

use serde::Serialize;
use tracing::{debug, warn};

use crate::card::geometry::{CardGeometry, SafeRect};
use crate::card::metrics::TextMeasurer;
use crate::card::wrap::wrap_text;
use crate::card::CardError;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of the font search for one render call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    /// Quote text with `\n` line breaks.
    pub wrapped_text: String,
    pub font_size: u32,
    pub author_font_size: u32,
    pub text_block_height: f32,
    pub author_block_height: f32,
    pub spacer: f32,
    /// False when even the smallest size overflows the box.
    pub fits: bool,
    /// Number of candidate sizes evaluated.
    pub evaluations: u32,
}

impl LayoutResult {
    /// Height of quote + spacer + author.
    pub fn total_height(&self) -> f32 {
        self.text_block_height + self.spacer + self.author_block_height
    }
}

/// Anchor points for the two text blocks. Each `y` is the vertical midpoint
/// of its block. The quote `x` is its horizontal center, the author `x` its
/// right edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub quote_x: f32,
    pub quote_mid_y: f32,
    pub author_right_x: f32,
    pub author_mid_y: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Search
// ────────────────────────────────────────────────────────────────────────────

/// First font size tried for a box of the given width.
pub fn initial_font_size(box_width: f32, geometry: &CardGeometry) -> u32 {
    (box_width / geometry.initial_font_divisor as f32) as u32
}

/// Candidate sizes in evaluation order: `initial, initial - step, ...`, never
/// below `min_font_size`. A box too narrow for the minimum yields only the minimum.
pub fn candidate_sizes(initial: u32, geometry: &CardGeometry) -> Vec<u32> {
    let min = geometry.min_font_size.max(1);
    let step = geometry.font_step.max(1) as usize;
    if initial < min {
        return vec![min];
    }
    (min..=initial).rev().step_by(step).collect()
}

/// Evaluates a single font size.
fn evaluate(
    text: &str,
    author: &str,
    font_size: u32,
    rect: &SafeRect,
    geometry: &CardGeometry,
    measurer: &dyn TextMeasurer,
) -> Result<LayoutResult, CardError> {
    let avg_glyph_width = geometry.glyph_width_ratio * font_size as f32;
    let columns = ((rect.width() / avg_glyph_width).floor() as usize).max(1);
    let wrapped_text = wrap_text(text, columns);

    let author_font_size = ((font_size as f32 * geometry.author_scale) as u32).max(1);
    let text_block_height = measurer.measure(&wrapped_text, font_size)?.height;
    let author_block_height = measurer.measure(author, author_font_size)?.height;
    let spacer = geometry.spacer_ratio * font_size as f32;

    let mut result = LayoutResult {
        wrapped_text,
        font_size,
        author_font_size,
        text_block_height,
        author_block_height,
        spacer,
        fits: false,
        evaluations: 0,
    };
    result.fits = result.total_height() <= rect.height();
    Ok(result)
}

/// Picks the largest candidate font size whose wrapped stack fits `rect`.
pub fn fit_text(
    text: &str,
    author: &str,
    rect: &SafeRect,
    geometry: &CardGeometry,
    measurer: &dyn TextMeasurer,
) -> Result<LayoutResult, CardError> {
    let initial = initial_font_size(rect.width(), geometry);
    let mut last: Option<LayoutResult> = None;
    let mut evaluations = 0u32;

    for font_size in candidate_sizes(initial, geometry) {
        evaluations += 1;
        let mut candidate = evaluate(text, author, font_size, rect, geometry, measurer)?;
        candidate.evaluations = evaluations;

        if candidate.fits {
            debug!(
                font_size,
                evaluations,
                total_height = candidate.total_height(),
                box_height = rect.height(),
                "Card text fits"
            );
            return Ok(candidate);
        }
        last = Some(candidate);
    }

    // candidate_sizes is never empty, so `last` is always set here.
    let fallback = last.ok_or_else(|| CardError::Measurement("no font size evaluated".to_string()))?;
    warn!(
        font_size = fallback.font_size,
        evaluations,
        total_height = fallback.total_height(),
        box_height = rect.height(),
        "Card text overflows the safe zone at the minimum font size"
    );
    Ok(fallback)
}

/// Vertically centers the quote/spacer/author stack inside `rect`.
pub fn place_blocks(rect: &SafeRect, layout: &LayoutResult) -> Placement {
    let stack_top = rect.center_y() - layout.total_height() / 2.0;
    let quote_mid_y = stack_top + layout.text_block_height / 2.0;
    let author_mid_y = stack_top
        + layout.text_block_height
        + layout.spacer
        + layout.author_block_height / 2.0;

    Placement {
        quote_x: rect.center_x(),
        quote_mid_y,
        author_right_x: rect.right,
        author_mid_y,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
