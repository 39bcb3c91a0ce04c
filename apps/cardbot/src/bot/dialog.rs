//! Menu dispatch.
//!
//! `dispatch` maps one incoming text to one action, given the chat's pending
//! turn. `DialogStore` keeps at most one pending turn per chat (waiting for a
//! birth day) and nothing else. Turns left unanswered for longer than
//! `PENDING_TURN_TTL` are dropped.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::bot::messages::{
    BUTTON_MOON, BUTTON_PERSONAL_DAY, BUTTON_QUOTE, BUTTON_SUN, START_COMMAND,
};
use crate::gallery::Gallery;
use crate::numerology::parse_birth_day;

/// What the chat is waiting for, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingTurn {
    AwaitingBirthDay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotAction {
    ShowMenu,
    SendGallery(Gallery),
    SendQuoteCard,
    AskBirthDay,
    SendPersonalDay { birth_day: u32 },
    /// Birth day reply could not be used; carries the correction hint.
    InvalidBirthDay(String),
    UseButtons,
}

impl BotAction {
    /// The pending turn left behind after this action.
    fn next_turn(&self) -> Option<PendingTurn> {
        match self {
            BotAction::AskBirthDay | BotAction::InvalidBirthDay(_) => Some(PendingTurn::AwaitingBirthDay),
            _ => None,
        }
    }
}

/// Decides the reply to `text`. Menu buttons and `/start` always win over a
/// pending turn.
pub fn dispatch(text: &str, pending: Option<PendingTurn>) -> BotAction {
    let text = text.trim();

    if text == START_COMMAND || text.starts_with("/start ") {
        return BotAction::ShowMenu;
    }
    match text {
        BUTTON_MOON => return BotAction::SendGallery(Gallery::Moon),
        BUTTON_SUN => return BotAction::SendGallery(Gallery::Sun),
        BUTTON_QUOTE => return BotAction::SendQuoteCard,
        BUTTON_PERSONAL_DAY => return BotAction::AskBirthDay,
        _ => {}
    }

    match pending {
        Some(PendingTurn::AwaitingBirthDay) => match parse_birth_day(text) {
            Ok(birth_day) => BotAction::SendPersonalDay { birth_day },
            Err(e) => BotAction::InvalidBirthDay(e.to_string()),
        },
        None => BotAction::UseButtons,
    }
}

/// How long an unanswered question stays open.
pub const PENDING_TURN_TTL: Duration = Duration::from_secs(30 * 60);

/// Per-chat pending turns, stamped with when they were opened.
#[derive(Debug, Default)]
pub struct DialogStore {
    turns: Mutex<HashMap<i64, (PendingTurn, Instant)>>,
}

impl DialogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches `text` and records the resulting pending turn.
    pub fn handle(&self, chat_id: i64, text: &str) -> BotAction {
        self.handle_at(chat_id, text, Instant::now())
    }

    fn handle_at(&self, chat_id: i64, text: &str, now: Instant) -> BotAction {
        let mut turns = self.lock();
        let before = turns.len();
        turns.retain(|_, (_, opened)| now.saturating_duration_since(*opened) < PENDING_TURN_TTL);
        if turns.len() < before {
            debug!(evicted = before - turns.len(), "Dropped stale pending turns");
        }

        let pending = turns.get(&chat_id).map(|(turn, _)| *turn);
        let action = dispatch(text, pending);
        match action.next_turn() {
            Some(turn) => {
                turns.insert(chat_id, (turn, now));
            }
            None => {
                turns.remove(&chat_id);
            }
        }
        action
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<i64, (PendingTurn, Instant)>> {
        // Entries are plain values, so a poisoned map is still usable.
        self.turns.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
