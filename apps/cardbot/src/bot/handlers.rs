//! Axum route handler for chat messages forwarded by the platform glue.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::bot::dialog::BotAction;
use crate::bot::messages;
use crate::card::handlers::render_card;
use crate::errors::AppError;
use crate::gallery::handlers::random_photo;
use crate::gallery::Gallery;
use crate::numerology::{personal_day, today_day_of_month};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub text: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TextReply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<Vec<Vec<String>>>,
}

/// A reply for the chat: a photo body or a JSON text message.
#[derive(Debug)]
pub enum BotReply {
    Text(TextReply),
    Photo {
        bytes: Bytes,
        content_type: &'static str,
    },
}

impl BotReply {
    fn text(text: impl Into<String>) -> Self {
        BotReply::Text(TextReply {
            text: text.into(),
            keyboard: None,
        })
    }

    fn with_menu(text: impl Into<String>) -> Self {
        BotReply::Text(TextReply {
            text: text.into(),
            keyboard: Some(messages::main_keyboard()),
        })
    }

    fn png(bytes: Bytes) -> Self {
        BotReply::Photo {
            bytes,
            content_type: "image/png",
        }
    }
}

impl IntoResponse for BotReply {
    fn into_response(self) -> Response {
        match self {
            BotReply::Text(reply) => Json(reply).into_response(),
            BotReply::Photo {
                bytes,
                content_type,
            } => ([(header::CONTENT_TYPE, content_type)], bytes).into_response(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/bot/messages
pub async fn handle_message(
    State(state): State<AppState>,
    Json(message): Json<IncomingMessage>,
) -> Result<BotReply, AppError> {
    let action = state.dialogs.handle(message.chat_id, &message.text);
    info!(chat_id = message.chat_id, ?action, "Bot action");
    execute(&state, action).await
}

async fn execute(state: &AppState, action: BotAction) -> Result<BotReply, AppError> {
    match action {
        BotAction::ShowMenu => Ok(BotReply::with_menu(messages::GREETING)),
        BotAction::UseButtons => Ok(BotReply::with_menu(messages::USE_BUTTONS)),
        BotAction::AskBirthDay => Ok(BotReply::text(messages::ASK_BIRTH_DAY)),
        BotAction::InvalidBirthDay(hint) => Ok(BotReply::text(hint)),
        BotAction::SendGallery(gallery) => Ok(send_gallery(state, gallery).await),
        BotAction::SendQuoteCard => send_quote_card(state).await,
        BotAction::SendPersonalDay { birth_day } => send_personal_day(state, birth_day).await,
    }
}

async fn send_gallery(state: &AppState, gallery: Gallery) -> BotReply {
    match random_photo(state, gallery).await {
        Ok(Some((bytes, content_type))) => BotReply::Photo {
            bytes: Bytes::from(bytes),
            content_type,
        },
        Ok(None) => BotReply::text(messages::GALLERY_EMPTY),
        Err(AppError::NotFound(msg)) => {
            warn!(?gallery, "{msg}");
            BotReply::text(messages::GALLERY_MISSING)
        }
        Err(e) => {
            error!(?gallery, "Failed to send gallery photo: {e}");
            BotReply::text(messages::IMAGE_ERROR)
        }
    }
}

async fn send_quote_card(state: &AppState) -> Result<BotReply, AppError> {
    let Some(quote) = state.content.random_quote(&mut rand::thread_rng()).cloned() else {
        return Ok(BotReply::text(messages::NO_QUOTES));
    };

    match render_card(state, quote.text.clone(), quote.author.clone()).await {
        Ok(png) => Ok(BotReply::png(png)),
        Err(AppError::RenderFailed(e)) => {
            warn!("Quote card failed, replying with text: {e}");
            Ok(BotReply::text(messages::quote_text(&quote.text, &quote.author)))
        }
        Err(e) => Err(e),
    }
}

async fn send_personal_day(state: &AppState, birth_day: u32) -> Result<BotReply, AppError> {
    let result = personal_day(birth_day, today_day_of_month())?;

    let Some(forecast) = state.content.forecast(result.personal_day).cloned() else {
        return Ok(BotReply::with_menu(messages::personal_day_text(result.personal_day)));
    };

    match render_card(
        state,
        forecast.card_text(),
        forecast.card_caption(result.personal_day),
    )
    .await
    {
        Ok(png) => Ok(BotReply::png(png)),
        Err(AppError::RenderFailed(e)) => {
            warn!("Forecast card failed, replying with text: {e}");
            Ok(BotReply::with_menu(forecast.to_message(result.personal_day)))
        }
        Err(e) => Err(e),
    }
}
