use std::sync::Arc;

use crate::bot::DialogStore;
use crate::card::{BackgroundSource, CardLayoutEngine};
use crate::config::Config;
use crate::content::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything except `dialogs` is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub content: Arc<ContentStore>,
    pub engine: Arc<CardLayoutEngine>,
    /// Background for every card render: one file or a random pick from a folder.
    pub background: Arc<dyn BackgroundSource>,
    /// At most one in-flight dialog turn per chat.
    pub dialogs: Arc<DialogStore>,
}
