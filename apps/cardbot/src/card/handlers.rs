//! Axum route handlers for the Card API.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::numerology::handlers::PersonalDayQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderCardRequest {
    pub text: String,
    #[serde(default)]
    pub author: String,
}

/// Renders a card on the blocking pool and returns PNG bytes.
///
/// Any `CardError` surfaces as `AppError::RenderFailed`; callers that can fall
/// back to a text reply match on that variant.
pub async fn render_card(state: &AppState, text: String, author: String) -> Result<Bytes, AppError> {
    let engine = state.engine.clone();
    let background = state.background.clone();

    let png = tokio::task::spawn_blocking(move || {
        engine.render_png(&text, &author, background.as_ref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in card render: {e}")))??;

    Ok(Bytes::from(png))
}

pub fn png_response(png: Bytes) -> Response {
    ([(header::CONTENT_TYPE, "image/png")], png).into_response()
}

/// POST /api/v1/cards/render
pub async fn handle_render_card(
    State(state): State<AppState>,
    Json(request): Json<RenderCardRequest>,
) -> Result<Response, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let png = render_card(&state, request.text, request.author).await?;
    Ok(png_response(png))
}

/// GET /api/v1/cards/quote
///
/// Picks a random quote from the dataset and renders it.
pub async fn handle_quote_card(State(state): State<AppState>) -> Result<Response, AppError> {
    let quote = state
        .content
        .random_quote(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| AppError::NotFound("No quotes loaded".to_string()))?;

    info!(author = %quote.author, "Rendering quote card");
    let png = render_card(&state, quote.text, quote.author).await?;
    Ok(png_response(png))
}

/// GET /api/v1/cards/personal-day?birth_day=15[&current_day=20]
pub async fn handle_personal_day_card(
    State(state): State<AppState>,
    Query(params): Query<PersonalDayQuery>,
) -> Result<Response, AppError> {
    let result = params.compute()?;
    let forecast = state
        .content
        .forecast(result.personal_day)
        .cloned()
        .ok_or_else(|| {
            AppError::NotFound(format!("No forecast for personal day {}", result.personal_day))
        })?;

    let png = render_card(
        &state,
        forecast.card_text(),
        forecast.card_caption(result.personal_day),
    )
    .await?;
    Ok(png_response(png))
}
