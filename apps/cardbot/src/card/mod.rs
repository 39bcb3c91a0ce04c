// Card rendering: fits quote text into the scaled safe zone of a background
// image and draws it. CPU-bound; handlers run it inside spawn_blocking.

pub mod background;
pub mod draw;
pub mod engine;
pub mod fit;
pub mod font;
pub mod geometry;
pub mod handlers;
pub mod metrics;
pub mod wrap;

use thiserror::Error;

pub use background::{BackgroundSource, FileBackground, RandomFileBackground};
pub use engine::CardLayoutEngine;
pub use font::CardFont;
pub use geometry::{CardGeometry, CardStyle};

/// Failures while producing a card image. All of them surface to callers as
/// "image generation failed"; a missing asset is not one of them.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("text measurement failed: {0}")]
    Measurement(String),

    #[error("failed to decode background image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode card image: {0}")]
    Encode(#[source] image::ImageError),
}
