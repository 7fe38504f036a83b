use axum::{Json, extract::State};

use super::extract::JsonBody;
use crate::{
    error::{AppError, MUSIC_ERRORS},
    message::{MusicRequest, MusicResponse},
    state::SharedState,
};

pub async fn music_handler(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<MusicRequest>,
) -> Result<Json<MusicResponse>, AppError> {
    // Validated by the extractor.
    let prompt = payload.prompt().unwrap_or_default();

    let audio = state
        .music
        .generate(prompt)
        .await
        .map_err(|e| AppError::vendor(e, &MUSIC_ERRORS))?;

    Ok(Json(MusicResponse { audio }))
}
