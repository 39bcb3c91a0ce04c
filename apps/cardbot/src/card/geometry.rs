//! Card geometry: the reference safe zone and its scaling to real canvases.
//!
//! Margins are defined once against an 800×600 reference canvas. For a canvas
//! of any other size they are scaled per axis: horizontal margins by
//! `width / 800`, vertical margins by `height / 600`. The aspect ratio of the
//! margins is deliberately not preserved.

use image::Rgba;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Safe zone
// ────────────────────────────────────────────────────────────────────────────

/// Margins of the text area, in reference-canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeZoneSpec {
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl Default for SafeZoneSpec {
    fn default() -> Self {
        Self {
            margin_left: 115.0,
            margin_right: 110.0,
            margin_top: 132.0,
            margin_bottom: 110.0,
        }
    }
}

/// Absolute text rectangle on a concrete canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl SafeRect {
    /// Width of the box; zero when the margins overlap.
    pub fn width(&self) -> f32 {
        (self.right - self.left).max(0.0)
    }

    /// Height of the box; zero when the margins overlap.
    pub fn height(&self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine configuration
// ────────────────────────────────────────────────────────────────────────────

/// Immutable layout parameters for the card engine.
///
/// `glyph_width_ratio` is the average glyph width in em units used to derive
/// the wrap column. It is a heuristic, not a font metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardGeometry {
    pub reference_width: u32,
    pub reference_height: u32,
    pub safe_zone: SafeZoneSpec,
    pub glyph_width_ratio: f32,
    /// Initial font size = box width / this divisor.
    pub initial_font_divisor: u32,
    pub font_step: u32,
    pub min_font_size: u32,
    /// Author font size relative to the quote font size.
    pub author_scale: f32,
    /// Gap between quote and author, relative to the quote font size.
    pub spacer_ratio: f32,
}

impl Default for CardGeometry {
    fn default() -> Self {
        Self {
            reference_width: 800,
            reference_height: 600,
            safe_zone: SafeZoneSpec::default(),
            glyph_width_ratio: 0.55,
            initial_font_divisor: 14,
            font_step: 2,
            min_font_size: 14,
            author_scale: 0.7,
            spacer_ratio: 1.2,
        }
    }
}

impl CardGeometry {
    /// Scales the safe zone to a `width × height` canvas, each axis independently.
    pub fn safe_rect(&self, width: u32, height: u32) -> SafeRect {
        let sx = width as f32 / self.reference_width as f32;
        let sy = height as f32 / self.reference_height as f32;
        let zone = &self.safe_zone;

        SafeRect {
            left: zone.margin_left * sx,
            top: zone.margin_top * sy,
            right: width as f32 - zone.margin_right * sx,
            bottom: height as f32 - zone.margin_bottom * sy,
        }
    }
}

/// Colors used when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub quote_color: Rgba<u8>,
    pub author_color: Rgba<u8>,
    /// Fill of the synthesized background when no asset is available.
    pub fallback_fill: Rgba<u8>,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            quote_color: Rgba([245, 245, 240, 255]),
            author_color: Rgba([190, 190, 185, 255]),
            fallback_fill: Rgba([34, 38, 58, 255]),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
