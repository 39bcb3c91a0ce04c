pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::bot::handlers as bot;
use crate::card::handlers as cards;
use crate::gallery::handlers as gallery;
use crate::numerology::handlers as numerology;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Cards
        .route("/api/v1/cards/render", post(cards::handle_render_card))
        .route("/api/v1/cards/quote", get(cards::handle_quote_card))
        .route(
            "/api/v1/cards/personal-day",
            get(cards::handle_personal_day_card),
        )
        // Numerology
        .route(
            "/api/v1/numerology/personal-day",
            get(numerology::handle_personal_day),
        )
        // Galleries
        .route("/api/v1/gallery/:name", get(gallery::handle_random_photo))
        // Chat front end
        .route("/api/v1/bot/messages", post(bot::handle_message))
        .with_state(state)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
