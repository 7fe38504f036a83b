// src/routes/extract.rs
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::AppError;
use crate::message::{CodeRequest, ConversationRequest, MusicRequest, VideoRequest};

/// A request body the adapters accept, with the error it reports when the
/// required field is absent, mistyped or empty.
pub trait JsonRequest: DeserializeOwned {
    const REQUIRED: &'static str;

    fn is_valid(&self) -> bool;
}

impl JsonRequest for ConversationRequest {
    const REQUIRED: &'static str = "Message is required";

    fn is_valid(&self) -> bool {
        !self.message.trim().is_empty()
    }
}

impl JsonRequest for CodeRequest {
    const REQUIRED: &'static str = "Contents array is required";

    fn is_valid(&self) -> bool {
        !self.contents.is_empty()
    }
}

impl JsonRequest for MusicRequest {
    const REQUIRED: &'static str = "Prompt is required";

    fn is_valid(&self) -> bool {
        self.prompt().is_some_and(|p| !p.trim().is_empty())
    }
}

impl JsonRequest for VideoRequest {
    const REQUIRED: &'static str = "Prompt is required";

    fn is_valid(&self) -> bool {
        !self.prompt.trim().is_empty()
    }
}

/// JSON body extractor that answers every rejection with a 400 `{ error }`.
pub struct JsonBody<T>(pub T);

fn declares_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
}

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: JsonRequest + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !declares_json(&req) {
            return Err(AppError::bad_request("Invalid content type"));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::bad_request("Invalid JSON body"))?;

        let value: T = serde_json::from_slice(&bytes).map_err(|e| match e.classify() {
            Category::Data => AppError::bad_request(T::REQUIRED),
            _ => AppError::bad_request("Invalid JSON body"),
        })?;

        if !value.is_valid() {
            return Err(AppError::bad_request(T::REQUIRED));
        }
        Ok(JsonBody(value))
    }
}
