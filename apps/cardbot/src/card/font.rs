//! Font resolution for card text.
//!
//! Lookup order: the configured font file, then the system sans-serif face
//! found through `fontdb`, then the built-in heuristic face. A missing or
//! unreadable font is never an error; the engine always gets something it
//! can measure and draw with.

use std::path::Path;

use fontdue::{Font, FontSettings};
use tracing::{info, warn};

use crate::card::metrics::{HeuristicMetrics, TextMeasurer};

/// Fallback line height (em) when a font has no horizontal line metrics.
const DEFAULT_LINE_HEIGHT_EM: f32 = 1.2;

/// The face used to measure and draw card text.
pub enum CardFont {
    /// A parsed TrueType/OpenType face.
    Outline(Font),
    /// No outline font available: fixed-ratio metrics, glyphs drawn as boxes.
    Heuristic(HeuristicMetrics),
}

impl std::fmt::Debug for CardFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFont::Outline(_) => f.write_str("Outline"),
            CardFont::Heuristic(metrics) => f.debug_tuple("Heuristic").field(metrics).finish(),
        }
    }
}

impl CardFont {
    /// Resolves a usable font. Never fails.
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match load_font_file(path) {
                Ok(font) => {
                    info!(path = %path.display(), "Loaded card font");
                    return CardFont::Outline(font);
                }
                Err(e) => warn!(path = %path.display(), "Card font unavailable: {e}"),
            }
        }

        if let Some(font) = load_system_sans_serif() {
            info!("Using system sans-serif font for cards");
            return CardFont::Outline(font);
        }

        warn!("No outline font found, card text will use heuristic metrics");
        CardFont::Heuristic(HeuristicMetrics::default())
    }

    /// Distance from the top of a line box to its baseline.
    pub fn ascent(&self, font_size: u32) -> f32 {
        match self {
            CardFont::Outline(font) => font
                .horizontal_line_metrics(font_size as f32)
                .map(|m| m.ascent)
                .unwrap_or(font_size as f32),
            CardFont::Heuristic(_) => font_size as f32,
        }
    }
}

impl TextMeasurer for CardFont {
    fn line_width(&self, line: &str, font_size: u32) -> f32 {
        match self {
            CardFont::Outline(font) => line
                .chars()
                .map(|c| font.metrics(c, font_size as f32).advance_width)
                .sum(),
            CardFont::Heuristic(metrics) => metrics.line_width(line, font_size),
        }
    }

    fn line_height(&self, font_size: u32) -> f32 {
        match self {
            CardFont::Outline(font) => font
                .horizontal_line_metrics(font_size as f32)
                .map(|m| m.new_line_size)
                .unwrap_or(DEFAULT_LINE_HEIGHT_EM * font_size as f32),
            CardFont::Heuristic(metrics) => metrics.line_height(font_size),
        }
    }
}

fn load_font_file(path: &Path) -> Result<Font, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    Font::from_bytes(bytes, FontSettings::default()).map_err(|e| e.to_string())
}

fn load_system_sans_serif() -> Option<Font> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    };
    let id = db.query(&query)?;

    db.with_face_data(id, |data, index| {
        let settings = FontSettings {
            collection_index: index,
            ..FontSettings::default()
        };
        Font::from_bytes(data, settings).ok()
    })
    .flatten()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
