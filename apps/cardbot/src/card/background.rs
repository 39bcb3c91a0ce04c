//! Background sources for cards.
//!
//! A source reports `Ok(None)` when its asset is missing; the engine then
//! paints a flat canvas of the reference size. Only an asset that exists but
//! cannot be decoded is an error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageError, RgbaImage};
use tracing::{debug, warn};

use crate::card::geometry::{CardGeometry, CardStyle};
use crate::card::CardError;
use crate::gallery::{pick_random_image, GalleryError};

/// Pluggable provider of the card background.
pub trait BackgroundSource: Send + Sync {
    fn open(&self) -> Result<Option<DynamicImage>, CardError>;
}

/// Always falls back to the flat canvas.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBackground;

#[cfg(test)]
impl BackgroundSource for NoBackground {
    fn open(&self) -> Result<Option<DynamicImage>, CardError> {
        Ok(None)
    }
}

/// A single image file.
#[derive(Debug, Clone)]
pub struct FileBackground {
    pub path: PathBuf,
}

impl FileBackground {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BackgroundSource for FileBackground {
    fn open(&self) -> Result<Option<DynamicImage>, CardError> {
        open_image(&self.path)
    }
}

/// A random image from a folder, picked anew on every render.
#[derive(Debug, Clone)]
pub struct RandomFileBackground {
    pub dir: PathBuf,
}

impl RandomFileBackground {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl BackgroundSource for RandomFileBackground {
    fn open(&self) -> Result<Option<DynamicImage>, CardError> {
        match pick_random_image(&self.dir, &mut rand::thread_rng()) {
            Ok(Some(path)) => open_image(&path),
            Ok(None) => Ok(None),
            Err(GalleryError::FolderMissing(_)) => Ok(None),
            Err(e) => {
                warn!(dir = %self.dir.display(), "Background folder unreadable: {e}");
                Ok(None)
            }
        }
    }
}

fn open_image(path: &Path) -> Result<Option<DynamicImage>, CardError> {
    if !path.is_file() {
        debug!(path = %path.display(), "Background asset missing");
        return Ok(None);
    }
    match image::open(path) {
        Ok(image) => Ok(Some(image)),
        Err(ImageError::IoError(e)) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(CardError::Decode(e)),
    }
}

/// Loads the background as RGBA, or synthesizes the flat fallback canvas.
pub fn resolve_background(
    source: &dyn BackgroundSource,
    geometry: &CardGeometry,
    style: &CardStyle,
) -> Result<RgbaImage, CardError> {
    match source.open()? {
        Some(image) => Ok(image.to_rgba8()),
        None => Ok(RgbaImage::from_pixel(
            geometry.reference_width,
            geometry.reference_height,
            style.fallback_fill,
        )),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
