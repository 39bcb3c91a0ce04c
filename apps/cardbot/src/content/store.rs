//! JSON-backed quote and forecast datasets.
//!
//! Quotes: a JSON array of `{ "text", "author" }`.
//! Forecasts: a JSON object keyed by personal-day number ("1".."22").
//!
//! A missing file yields an empty dataset (logged); malformed JSON fails startup.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::content::models::{ForecastEntry, Quote};

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    quotes: Vec<Quote>,
    forecasts: HashMap<u32, ForecastEntry>,
}

impl ContentStore {
    pub fn new(quotes: Vec<Quote>, forecasts: HashMap<u32, ForecastEntry>) -> Self {
        Self { quotes, forecasts }
    }

    /// Loads both datasets from disk.
    pub fn load(quotes_path: &Path, forecasts_path: &Path) -> Result<Self> {
        let quotes: Vec<Quote> = read_json_or_default(quotes_path)?;

        let raw: HashMap<String, ForecastEntry> = read_json_or_default(forecasts_path)?;
        let mut forecasts = HashMap::with_capacity(raw.len());
        for (key, entry) in raw {
            let day = key
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Forecast key '{key}' is not a personal-day number"))?;
            forecasts.insert(day, entry);
        }

        info!(
            quotes = quotes.len(),
            forecasts = forecasts.len(),
            "Content datasets loaded"
        );
        Ok(Self::new(quotes, forecasts))
    }

    /// A uniformly random quote, or `None` when the dataset is empty.
    pub fn random_quote(&self, rng: &mut impl Rng) -> Option<&Quote> {
        self.quotes.choose(rng)
    }

    pub fn forecast(&self, personal_day: u32) -> Option<&ForecastEntry> {
        self.forecasts.get(&personal_day)
    }
}

fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Dataset file not found, using an empty dataset");
            return Ok(T::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read dataset {}", path.display()))
        }
    };
    serde_json::from_str(&raw).with_context(|| format!("Malformed JSON in {}", path.display()))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const QUOTES: &str = r#"[
        {"text": "Know thyself.", "author": "Delphi"},
        {"text": "This too shall pass.", "author": "Unknown"}
    ]"#;

    const FORECASTS: &str = r#"{
        "1": {"title": "The Magician", "positive": "p1", "negative": "n1", "advice": "a1"},
        "22": {"title": "The Fool", "positive": "p22", "negative": "n22", "advice": "a22"}
    }"#;

    fn write_fixtures(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
        let quotes = dir.join("quotes.json");
        let forecasts = dir.join("forecasts.json");
        std::fs::write(&quotes, QUOTES).unwrap();
        std::fs::write(&forecasts, FORECASTS).unwrap();
        (quotes, forecasts)
    }

    #[test]
    fn test_load_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let (quotes, forecasts) = write_fixtures(dir.path());
        let store = ContentStore::load(&quotes, &forecasts).unwrap();

        assert_eq!(store.quotes.len(), 2);
        assert_eq!(store.forecast(1).unwrap().title, "The Magician");
        assert_eq!(store.forecast(22).unwrap().title, "The Fool");
        assert!(store.forecast(5).is_none());
    }

    #[test]
    fn test_missing_files_give_empty_store() {
        let store = ContentStore::load(
            Path::new("/nonexistent/quotes.json"),
            Path::new("/nonexistent/forecasts.json"),
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(store.random_quote(&mut rng).is_none());
        assert!(store.forecast(1).is_none());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let quotes = dir.path().join("quotes.json");
        std::fs::write(&quotes, "[{\"text\": ").unwrap();
        assert!(ContentStore::load(&quotes, &dir.path().join("none.json")).is_err());
    }

    #[test]
    fn test_non_numeric_forecast_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let forecasts = dir.path().join("forecasts.json");
        std::fs::write(
            &forecasts,
            r#"{"one": {"title": "t", "positive": "p", "negative": "n", "advice": "a"}}"#,
        )
        .unwrap();
        assert!(ContentStore::load(&dir.path().join("none.json"), &forecasts).is_err());
    }

    #[test]
    fn test_random_quote_covers_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let (quotes, forecasts) = write_fixtures(dir.path());
        let store = ContentStore::load(&quotes, &forecasts).unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let mut authors = std::collections::HashSet::new();
        for _ in 0..100 {
            authors.insert(store.random_quote(&mut rng).unwrap().author.clone());
        }
        assert_eq!(authors.len(), 2);
    }
}
