//! Axum route handlers for the photo galleries.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;
use crate::gallery::{content_type_for, pick_random_image, Gallery};
use crate::state::AppState;

/// Reads a random photo from `gallery`. `Ok(None)` means the folder is empty.
pub async fn random_photo(
    state: &AppState,
    gallery: Gallery,
) -> Result<Option<(Vec<u8>, &'static str)>, AppError> {
    let dir = gallery.dir(&state.config).to_path_buf();
    let picked = tokio::task::spawn_blocking(move || pick_random_image(&dir, &mut rand::thread_rng()))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in gallery pick: {e}")))??;

    let Some(path) = picked else {
        return Ok(None);
    };
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context(format!("reading {}", path.display()))))?;
    Ok(Some((bytes, content_type_for(&path))))
}

/// GET /api/v1/gallery/:name
pub async fn handle_random_photo(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let gallery = Gallery::from_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown gallery '{name}'")))?;

    match random_photo(&state, gallery).await? {
        Some((bytes, content_type)) => Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response()),
        None => Err(AppError::NotFound(format!("Gallery '{name}' has no images yet"))),
    }
}
