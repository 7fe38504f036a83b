use axum::{Json, extract::State};

use super::extract::JsonBody;
use crate::{
    error::{AppError, CODE_ERRORS},
    message::{CodeRequest, CodeResponse},
    services::GenerateRequest,
    state::SharedState,
};

pub async fn code_handler(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<CodeRequest>,
) -> Result<Json<CodeResponse>, AppError> {
    let text = state
        .code
        .generate(GenerateRequest::with_code_execution(payload.contents))
        .await
        .map_err(|e| AppError::vendor(e, &CODE_ERRORS))?;

    Ok(Json(CodeResponse::from_text(text)))
}
