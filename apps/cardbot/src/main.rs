mod bot;
mod card;
mod config;
mod content;
mod errors;
mod gallery;
mod numerology;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::bot::DialogStore;
use crate::card::{
    BackgroundSource, CardFont, CardGeometry, CardLayoutEngine, CardStyle, FileBackground,
    RandomFileBackground,
};
use crate::config::Config;
use crate::content::ContentStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cardbot v{}", env!("CARGO_PKG_VERSION"));

    // Datasets are read-only for the lifetime of the process
    let content = ContentStore::load(&config.quotes_path, &config.forecasts_path)?;

    // Font lookup may scan system font directories; keep it off the runtime threads
    let font_path = config.card_font_path.clone();
    let font = tokio::task::spawn_blocking(move || CardFont::load(font_path.as_deref())).await?;
    let engine = CardLayoutEngine::new(CardGeometry::default(), CardStyle::default(), font);
    info!(
        "Card engine ready: {}x{} reference canvas",
        engine.geometry().reference_width,
        engine.geometry().reference_height
    );

    let background: Arc<dyn BackgroundSource> = match &config.card_background_dir {
        Some(dir) => {
            info!("Card backgrounds: random from {}", dir.display());
            Arc::new(RandomFileBackground::new(dir))
        }
        None => {
            info!("Card background: {}", config.card_background_path.display());
            Arc::new(FileBackground::new(&config.card_background_path))
        }
    };

    let state = AppState {
        config: config.clone(),
        content: Arc::new(content),
        engine: Arc::new(engine),
        background,
        dialogs: Arc::new(DialogStore::new()),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
