// User-facing texts and menu buttons.

pub const BUTTON_MOON: &str = "Moon keepers 🌙";
pub const BUTTON_SUN: &str = "Sun keepers ☀️";
pub const BUTTON_QUOTE: &str = "Quote card ✨";
pub const BUTTON_PERSONAL_DAY: &str = "Personal day 🔢";

pub const START_COMMAND: &str = "/start";

pub const GREETING: &str = "Hi! Choose your side:";
pub const USE_BUTTONS: &str = "Please use the keyboard buttons.";
pub const ASK_BIRTH_DAY: &str =
    "Send your day of birth (1-31) or your full birth date, for example 15.03.1990.";
pub const GALLERY_EMPTY: &str = "There are no images in this gallery yet.";
pub const GALLERY_MISSING: &str = "Error: the gallery folder was not found on the server.";
pub const IMAGE_ERROR: &str = "Something went wrong while loading the image.";
pub const NO_QUOTES: &str = "No quotes are available right now.";

/// Main menu layout, two buttons per row.
pub fn main_keyboard() -> Vec<Vec<String>> {
    vec![
        vec![BUTTON_MOON.to_string(), BUTTON_SUN.to_string()],
        vec![BUTTON_QUOTE.to_string(), BUTTON_PERSONAL_DAY.to_string()],
    ]
}

pub fn quote_text(text: &str, author: &str) -> String {
    format!("“{}”\n— {}", text.trim(), author.trim())
}

pub fn personal_day_text(personal_day: u32) -> String {
    format!("Your personal day today is {personal_day}.")
}
