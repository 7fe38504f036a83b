// src/routes/mod.rs
pub mod code;
pub mod conversation;
pub mod extract;
pub mod music;
pub mod video;

use crate::state::SharedState;
use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use code::code_handler;
use conversation::conversation_handler;
use music::music_handler;
use video::video_handler;

pub fn create_router() -> Router<SharedState> {
    let api_routes = Router::new()
        .route("/conversation", post(conversation_handler))
        .route("/code", post(code_handler))
        .route("/music", post(music_handler))
        .route("/video", post(video_handler));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(|| async { "OK" }))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                    let request_id = req
                        .headers()
                        .get("x-request-id")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "request",
                        method = %req.method(),
                        uri = %req.uri(),
                        request_id = %request_id,
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

#[derive(Clone, Copy, Default)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}
