use serde::{Deserialize, Serialize};

/// A quote shown on a quote card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Forecast for one personal-day number (1..=22).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub title: String,
    pub positive: String,
    pub negative: String,
    pub advice: String,
}

impl ForecastEntry {
    /// Body text drawn on the forecast card.
    pub fn card_text(&self) -> String {
        format!("{} {}", self.positive.trim(), self.advice.trim())
    }

    /// Caption line drawn in the author slot of the forecast card.
    pub fn card_caption(&self, personal_day: u32) -> String {
        format!("Day {personal_day} · {}", self.title.trim())
    }

    /// Plain-text rendering used when a card cannot be produced.
    pub fn to_message(&self, personal_day: u32) -> String {
        format!(
            "Your personal day: {personal_day}. {}\n\n+ {}\n- {}\n\nAdvice: {}",
            self.title.trim(),
            self.positive.trim(),
            self.negative.trim(),
            self.advice.trim()
        )
    }
}
