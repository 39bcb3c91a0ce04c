//! The card layout engine: background, safe zone, font search, drawing.

use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, RgbaImage};
use tracing::{debug, instrument};

use crate::card::background::{resolve_background, BackgroundSource};
use crate::card::draw::{draw_block, Align};
use crate::card::fit::{fit_text, place_blocks, LayoutResult, Placement};
use crate::card::font::CardFont;
use crate::card::geometry::{CardGeometry, CardStyle, SafeRect};
use crate::card::CardError;

/// Renders quote cards. Immutable after construction; share it behind an `Arc`.
#[derive(Debug)]
pub struct CardLayoutEngine {
    geometry: CardGeometry,
    style: CardStyle,
    font: CardFont,
}

/// Everything computed for a card before any pixel is drawn.
#[derive(Debug, Clone)]
pub struct CardPlan {
    pub rect: SafeRect,
    pub layout: LayoutResult,
    pub placement: Placement,
}

impl CardLayoutEngine {
    pub fn new(geometry: CardGeometry, style: CardStyle, font: CardFont) -> Self {
        Self {
            geometry,
            style,
            font,
        }
    }

    pub fn geometry(&self) -> &CardGeometry {
        &self.geometry
    }

    /// Computes the safe rectangle, font sizes and anchors for a canvas.
    pub fn plan(&self, text: &str, author: &str, width: u32, height: u32) -> Result<CardPlan, CardError> {
        let rect = self.geometry.safe_rect(width, height);
        let layout = fit_text(text, author, &rect, &self.geometry, &self.font)?;
        let placement = place_blocks(&rect, &layout);
        Ok(CardPlan {
            rect,
            layout,
            placement,
        })
    }

    /// Draws `text` and `author` over the resolved background.
    #[instrument(skip_all, fields(text_len = text.chars().count()))]
    pub fn render(
        &self,
        text: &str,
        author: &str,
        background: &dyn BackgroundSource,
    ) -> Result<RgbaImage, CardError> {
        let mut canvas = resolve_background(background, &self.geometry, &self.style)?;
        let (width, height) = canvas.dimensions();
        let plan = self.plan(text, author, width, height)?;

        debug!(
            width,
            height,
            box_width = plan.rect.width(),
            box_height = plan.rect.height(),
            font_size = plan.layout.font_size,
            author_font_size = plan.layout.author_font_size,
            fits = plan.layout.fits,
            evaluations = plan.layout.evaluations,
            "Card layout resolved"
        );

        draw_block(
            &mut canvas,
            &self.font,
            &plan.layout.wrapped_text,
            plan.layout.font_size,
            plan.placement.quote_x,
            plan.placement.quote_mid_y,
            Align::Center,
            self.style.quote_color,
        )?;
        draw_block(
            &mut canvas,
            &self.font,
            author,
            plan.layout.author_font_size,
            plan.placement.author_right_x,
            plan.placement.author_mid_y,
            Align::Right,
            self.style.author_color,
        )?;

        Ok(canvas)
    }

    /// Renders and encodes the card as PNG.
    pub fn render_png(
        &self,
        text: &str,
        author: &str,
        background: &dyn BackgroundSource,
    ) -> Result<Vec<u8>, CardError> {
        let canvas = self.render(text, author, background)?;
        encode_png(canvas)
    }
}

/// Encodes an RGBA canvas as PNG bytes.
pub fn encode_png(canvas: RgbaImage) -> Result<Vec<u8>, CardError> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(canvas)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .map_err(CardError::Encode)?;
    Ok(bytes)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::background::{FileBackground, NoBackground};
    use crate::card::metrics::HeuristicMetrics;
    use image::Rgba;

    fn engine() -> CardLayoutEngine {
        CardLayoutEngine::new(
            CardGeometry::default(),
            CardStyle::default(),
            CardFont::Heuristic(HeuristicMetrics::default()),
        )
    }

    fn changed_pixels(canvas: &RgbaImage, fill: Rgba<u8>) -> Vec<(u32, u32)> {
        canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != fill)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_render_without_background_asset() {
        let engine = engine();
        let canvas = engine
            .render("Simplicity is the ultimate sophistication.", "Leonardo", &NoBackground)
            .unwrap();
        assert_eq!(canvas.dimensions(), (800, 600));
        assert!(!changed_pixels(&canvas, CardStyle::default().fallback_fill).is_empty());
    }

    #[test]
    fn test_text_is_drawn_inside_safe_zone_when_it_fits() {
        let engine = engine();
        let canvas = engine.render("Stay hungry, stay foolish.", "Jobs", &NoBackground).unwrap();
        let rect = engine.geometry().safe_rect(800, 600);

        for (x, y) in changed_pixels(&canvas, CardStyle::default().fallback_fill) {
            assert!(x as f32 >= rect.left - 1.0 && x as f32 <= rect.right + 1.0, "x {x} outside");
            assert!(y as f32 >= rect.top - 1.0 && y as f32 <= rect.bottom + 1.0, "y {y} outside");
        }
    }

    #[test]
    fn test_plan_on_double_canvas_scales_margins() {
        let plan = engine().plan("short", "me", 1600, 1200).unwrap();
        assert!((plan.rect.left - 230.0).abs() < 1e-3);
        assert!((plan.rect.top - 264.0).abs() < 1e-3);
        // 1150 / 14 = 82
        assert_eq!(plan.layout.font_size, 82);
        assert!((plan.placement.author_right_x - 1380.0).abs() < 1e-3);
    }

    #[test]
    fn test_background_resolution_drives_canvas_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        RgbaImage::from_pixel(1600, 600, Rgba([0, 0, 0, 255])).save(&path).unwrap();

        let canvas = engine()
            .render("A wide card", "Someone", &FileBackground::new(&path))
            .unwrap();
        assert_eq!(canvas.dimensions(), (1600, 600));
    }

    #[test]
    fn test_extremely_long_text_still_renders() {
        let text = "overflowing ".repeat(5_000);
        let canvas = engine().render(&text, "Verbose", &NoBackground).unwrap();
        assert_eq!(canvas.dimensions(), (800, 600));
    }

    #[test]
    fn test_empty_text_and_author_render() {
        let canvas = engine().render("", "", &NoBackground).unwrap();
        assert!(changed_pixels(&canvas, CardStyle::default().fallback_fill).is_empty());
    }

    #[test]
    fn test_tiny_canvas_renders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        RgbaImage::from_pixel(8, 6, Rgba([0, 0, 0, 255])).save(&path).unwrap();

        let canvas = engine()
            .render("Small but alive", "Tiny", &FileBackground::new(&path))
            .unwrap();
        assert_eq!(canvas.dimensions(), (8, 6));
    }

    #[test]
    fn test_render_png_produces_png_bytes() {
        let bytes = engine().render_png("Quote", "Author", &NoBackground).unwrap();
        assert!(bytes.len() > 8);
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (800, 600));
    }
}
