//! Glyph drawing onto an RGBA canvas.
//!
//! Text blocks are positioned by the vertical midpoint of the whole block and
//! either the horizontal center (each line centered) or the right edge (each
//! line right-aligned). Glyph coverage is alpha-blended over the background.

use image::{Rgba, RgbaImage};

use crate::card::font::CardFont;
use crate::card::metrics::TextMeasurer;
use crate::card::CardError;

/// Horizontal alignment of the lines in a block relative to its anchor `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Center,
    Right,
}

/// Draws a `\n`-separated block anchored at (`anchor_x`, `mid_y`).
#[allow(clippy::too_many_arguments)]
pub fn draw_block(
    canvas: &mut RgbaImage,
    font: &CardFont,
    text: &str,
    font_size: u32,
    anchor_x: f32,
    mid_y: f32,
    align: Align,
    color: Rgba<u8>,
) -> Result<(), CardError> {
    let extent = font.measure(text, font_size)?;
    if extent.width == 0.0 || extent.height == 0.0 {
        return Ok(());
    }

    let top = mid_y - extent.height / 2.0;
    let line_height = font.line_height(font_size);
    let ascent = font.ascent(font_size);

    for (i, line) in text.split('\n').enumerate() {
        let line_width = font.line_width(line, font_size);
        let x = match align {
            Align::Center => anchor_x - line_width / 2.0,
            Align::Right => anchor_x - line_width,
        };
        let baseline = top + i as f32 * line_height + ascent;
        draw_line(canvas, font, line, font_size, x, baseline, color);
    }
    Ok(())
}

fn draw_line(
    canvas: &mut RgbaImage,
    font: &CardFont,
    line: &str,
    font_size: u32,
    x: f32,
    baseline: f32,
    color: Rgba<u8>,
) {
    let px = font_size as f32;
    let mut caret = x;

    match font {
        CardFont::Outline(face) => {
            for c in line.chars() {
                let (metrics, coverage) = face.rasterize(c, px);
                let gx = (caret + metrics.xmin as f32).round() as i64;
                let gy = (baseline - metrics.height as f32 - metrics.ymin as f32).round() as i64;

                for row in 0..metrics.height {
                    for col in 0..metrics.width {
                        let value = coverage[row * metrics.width + col];
                        blend(canvas, gx + col as i64, gy + row as i64, color, value);
                    }
                }
                caret += metrics.advance_width;
            }
        }
        CardFont::Heuristic(metrics) => {
            // Placeholder boxes ("tofu") sized from the heuristic advance.
            let advance = metrics.avg_char_width * px;
            let box_width = (advance * 0.7).max(1.0) as i64;
            let box_height = (px * 0.7).max(1.0) as i64;

            for c in line.chars() {
                if !c.is_whitespace() {
                    let left = (caret + advance * 0.15).round() as i64;
                    let top = baseline.round() as i64 - box_height;
                    for dy in 0..box_height {
                        for dx in 0..box_width {
                            blend(canvas, left + dx, top + dy, color, u8::MAX);
                        }
                    }
                }
                caret += advance;
            }
        }
    }
}

/// Blends `color` at `coverage` (0-255) into the pixel at (`x`, `y`).
/// Out-of-bounds coordinates are ignored.
fn blend(canvas: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: u8) {
    if coverage == 0 || x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }

    let alpha = (coverage as f32 / 255.0) * (color[3] as f32 / 255.0);
    let inv = 1.0 - alpha;
    let dst = canvas.get_pixel_mut(x, y);
    for channel in 0..3 {
        dst[channel] = (color[channel] as f32 * alpha + dst[channel] as f32 * inv).round() as u8;
    }
    dst[3] = u8::MAX;
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::metrics::HeuristicMetrics;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn heuristic() -> CardFont {
        CardFont::Heuristic(HeuristicMetrics::default())
    }

    fn lit_pixels(canvas: &RgbaImage) -> Vec<(u32, u32)> {
        canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p[0] > 0)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_blend_full_and_partial_coverage() {
        let mut canvas = RgbaImage::from_pixel(2, 1, BLACK);
        blend(&mut canvas, 0, 0, WHITE, 255);
        blend(&mut canvas, 1, 0, WHITE, 128);
        assert_eq!(canvas.get_pixel(0, 0), &WHITE);
        assert_eq!(canvas.get_pixel(1, 0)[0], 128);
    }

    #[test]
    fn test_blend_ignores_out_of_bounds() {
        let mut canvas = RgbaImage::from_pixel(2, 2, BLACK);
        blend(&mut canvas, -1, 0, WHITE, 255);
        blend(&mut canvas, 0, 5, WHITE, 255);
        assert!(lit_pixels(&canvas).is_empty());
    }

    #[test]
    fn test_centered_block_is_symmetric_around_anchor() {
        let mut canvas = RgbaImage::from_pixel(200, 100, BLACK);
        draw_block(&mut canvas, &heuristic(), "abcd", 20, 100.0, 50.0, Align::Center, WHITE).unwrap();

        let lit = lit_pixels(&canvas);
        assert!(!lit.is_empty());
        let min_x = lit.iter().map(|p| p.0).min().unwrap();
        let max_x = lit.iter().map(|p| p.0).max().unwrap();
        let center = (min_x + max_x) as f32 / 2.0;
        assert!((center - 100.0).abs() <= 2.0, "block center {center} should be near 100");
    }

    #[test]
    fn test_right_aligned_block_ends_at_anchor() {
        let mut canvas = RgbaImage::from_pixel(200, 100, BLACK);
        draw_block(&mut canvas, &heuristic(), "abc", 20, 150.0, 50.0, Align::Right, WHITE).unwrap();

        let max_x = lit_pixels(&canvas).iter().map(|p| p.0).max().unwrap();
        assert!(max_x < 150);
        assert!(max_x >= 140);
    }

    #[test]
    fn test_empty_block_draws_nothing() {
        let mut canvas = RgbaImage::from_pixel(50, 50, BLACK);
        draw_block(&mut canvas, &heuristic(), "", 20, 25.0, 25.0, Align::Center, WHITE).unwrap();
        assert!(lit_pixels(&canvas).is_empty());
    }
}
