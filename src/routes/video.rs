use axum::{Json, extract::State};

use super::extract::JsonBody;
use crate::{
    error::VIDEO_ERROR_TAG,
    message::{VideoRequest, VideoResponse},
    services::{description::describe_video, video_catalog::select_video_url},
    state::SharedState,
};

const NO_DESCRIPTION: &str = "Description not available due to rate limits";

/// Never fails once the body is valid: a missing description falls back to
/// `NO_DESCRIPTION` and the placeholder video is still returned.
pub async fn video_handler(
    State(state): State<SharedState>,
    JsonBody(payload): JsonBody<VideoRequest>,
) -> Json<VideoResponse> {
    let prompt = payload.prompt;

    let description = describe_video(state.video_description.as_ref(), &prompt, state.retry)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("{} description generation failed: {}", VIDEO_ERROR_TAG, e);
            None
        });
    let video_url = select_video_url(&prompt);

    Json(VideoResponse {
        message: format!("Video request received for: {prompt}"),
        video_url: video_url.to_string(),
        description: description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
    })
}
