use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub quotes_path: PathBuf,
    pub forecasts_path: PathBuf,
    /// Single background image for cards.
    pub card_background_path: PathBuf,
    /// Optional folder of backgrounds; when set, a random one is used per card.
    pub card_background_dir: Option<PathBuf>,
    /// Optional TTF/OTF font file; the system sans-serif face is used otherwise.
    pub card_font_path: Option<PathBuf>,
    pub gallery_moon_dir: PathBuf,
    pub gallery_sun_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            quotes_path: env_or("QUOTES_PATH", "data/quotes.json").into(),
            forecasts_path: env_or("FORECASTS_PATH", "data/forecasts.json").into(),
            card_background_path: env_or("CARD_BACKGROUND_PATH", "images/card_background.jpg").into(),
            card_background_dir: optional_env("CARD_BACKGROUND_DIR").map(PathBuf::from),
            card_font_path: optional_env("CARD_FONT_PATH").map(PathBuf::from),
            gallery_moon_dir: env_or("GALLERY_MOON_DIR", "images/moon_guardians").into(),
            gallery_sun_dir: env_or("GALLERY_SUN_DIR", "images/sun_guardians").into(),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
