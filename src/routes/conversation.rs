use axum::{Json, extract::State};
use chrono::Local;

use super::extract::JsonBody;
use crate::{
    error::{AppError, CONVERSATION_ERRORS},
    message::{ConversationRequest, ConversationResponse},
    services::{GenerateRequest, conversation::conversation_prompt},
    state::SharedState,
};

pub async fn conversation_handler(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<ConversationRequest>,
) -> Result<Json<ConversationResponse>, AppError> {
    let prompt = conversation_prompt(Local::now().date_naive(), &payload.message);

    let message = state
        .conversation
        .generate(GenerateRequest::prompt(prompt))
        .await
        .map_err(|e| AppError::vendor(e, &CONVERSATION_ERRORS))?;

    Ok(Json(ConversationResponse { message }))
}
