//! Photo galleries: a random picture from a configured folder.

pub mod handlers;

use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("gallery folder {} not found", .0.display())]
    FolderMissing(PathBuf),

    #[error("failed to read gallery folder: {0}")]
    Io(#[from] std::io::Error),
}

/// The two photo galleries offered in the bot menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gallery {
    Moon,
    Sun,
}

impl Gallery {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "moon" => Some(Gallery::Moon),
            "sun" => Some(Gallery::Sun),
            _ => None,
        }
    }

    pub fn dir<'a>(&self, config: &'a Config) -> &'a Path {
        match self {
            Gallery::Moon => &config.gallery_moon_dir,
            Gallery::Sun => &config.gallery_sun_dir,
        }
    }
}

/// Picks a uniformly random regular file from `dir`.
///
/// Returns `Ok(None)` for an empty folder and `FolderMissing` when the folder
/// does not exist. Entries are sorted before picking so a seeded `rng` gives
/// reproducible results.
pub fn pick_random_image(dir: &Path, rng: &mut impl Rng) -> Result<Option<PathBuf>, GalleryError> {
    if !dir.is_dir() {
        return Err(GalleryError::FolderMissing(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();

    Ok(files.choose(rng).cloned())
}

/// MIME type for a photo, from its file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_missing_folder() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = pick_random_image(Path::new("/nonexistent/moon"), &mut rng).unwrap_err();
        assert!(matches!(err, GalleryError::FolderMissing(_)));
    }

    #[test]
    fn test_empty_folder_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_random_image(dir.path(), &mut rng).unwrap(), None);
    }

    #[test]
    fn test_picks_only_regular_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"a").unwrap();
        std::fs::write(dir.path().join("b.png"), b"b").unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = pick_random_image(dir.path(), &mut rng).unwrap().unwrap();
            assert!(picked.is_file());
        }
    }

    #[test]
    fn test_every_file_is_reachable() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["1.jpg", "2.jpg", "3.jpg"] {
            std::fs::write(dir.path().join(name), name).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_random_image(dir.path(), &mut rng).unwrap().unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_gallery_names() {
        assert_eq!(Gallery::from_name("Moon"), Some(Gallery::Moon));
        assert_eq!(Gallery::from_name(" sun "), Some(Gallery::Sun));
        assert_eq!(Gallery::from_name("stars"), None);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for(Path::new("a/b.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("b.png")), "image/png");
        assert_eq!(content_type_for(Path::new("noext")), "application/octet-stream");
    }
}
