#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use ai_dashboard_backend::error::VendorError;
use ai_dashboard_backend::routes::create_router;
use ai_dashboard_backend::services::description::RetryPolicy;
use ai_dashboard_backend::services::{AudioGenerator, GenerateRequest, TextGenerator};
use ai_dashboard_backend::state::AppState;
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use tokio::time::Instant;

/// Text vendor that replays a fixed script of results and records each call.
pub struct ScriptedText {
    script: Mutex<VecDeque<Result<String, VendorError>>>,
    pub calls: Mutex<Vec<(Instant, GenerateRequest)>>,
}

impl ScriptedText {
    pub fn new(script: Vec<Result<String, VendorError>>) -> Arc<Self> {
        Arc::new(Self { script: Mutex::new(script.into()), calls: Mutex::new(Vec::new()) })
    }

    pub fn ok(text: &str) -> Arc<Self> {
        Self::new(vec![Ok(text.to_string())])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }

    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.calls.lock().unwrap().last().map(|(_, r)| r.clone())
    }
}

#[async_trait]
impl TextGenerator for ScriptedText {
    async fn generate(&self, req: GenerateRequest) -> Result<String, VendorError> {
        self.calls.lock().unwrap().push((Instant::now(), req));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(VendorError::Unknown("script exhausted".into())))
    }
}

pub struct FixedAudio(pub Result<Option<String>, VendorError>);

#[async_trait]
impl AudioGenerator for FixedAudio {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, VendorError> {
        self.0.clone()
    }
}

pub struct Fakes {
    pub conversation: Arc<ScriptedText>,
    pub code: Arc<ScriptedText>,
    pub video_description: Arc<ScriptedText>,
    pub music: Result<Option<String>, VendorError>,
    pub retry: RetryPolicy,
}

impl Default for Fakes {
    fn default() -> Self {
        Self {
            conversation: ScriptedText::ok("hello from the model"),
            code: ScriptedText::ok("print('hi')"),
            video_description: ScriptedText::ok("A calm forest at dawn."),
            music: Ok(Some("https://cdn.example/audio.mp3".into())),
            retry: RetryPolicy::default(),
        }
    }
}

impl Fakes {
    pub fn app(&self) -> Router {
        let state = Arc::new(AppState {
            conversation: self.conversation.clone(),
            code: self.code.clone(),
            video_description: self.video_description.clone(),
            music: Arc::new(FixedAudio(self.music.clone())),
            retry: self.retry,
        });
        create_router().with_state(state)
    }
}

pub fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
