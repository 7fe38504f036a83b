// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failure categories reported by the vendor access layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VendorError {
    #[error("vendor configuration error: {0}")]
    Config(String),
    #[error("model not found: {0}")]
    NotFound(String),
    #[error("rate limited: {0}")]
    RateLimited(String),
    #[error("vendor error: {0}")]
    Unknown(String),
}

impl VendorError {
    /// Classifies a raw vendor message by the phrases vendors put in it.
    /// Only used when there is no HTTP status to go by.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("model not found") {
            VendorError::NotFound(message)
        } else if message.contains("API key") {
            VendorError::Config(message)
        } else if message.contains("quota") || message.contains("429") {
            VendorError::RateLimited(message)
        } else {
            VendorError::Unknown(message)
        }
    }

    pub fn from_status(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match status.as_u16() {
            401 | 403 => VendorError::Config(message),
            404 => VendorError::NotFound(message),
            429 => VendorError::RateLimited(message),
            _ => VendorError::classify(message),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, VendorError::RateLimited(_))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            VendorError::Config(_) => StatusCode::UNAUTHORIZED,
            VendorError::NotFound(_) => StatusCode::NOT_FOUND,
            VendorError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            VendorError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for VendorError {
    fn from(e: reqwest::Error) -> Self {
        VendorError::Unknown(e.to_string())
    }
}

/// Client-facing text for each vendor failure kind of one endpoint.
/// A `None` entry folds that kind into the fallback 500.
#[derive(Debug, Clone, Copy)]
pub struct VendorErrorMessages {
    pub tag: &'static str,
    pub config: Option<&'static str>,
    pub not_found: Option<&'static str>,
    pub rate_limited: Option<&'static str>,
    pub fallback: &'static str,
}

pub const CONVERSATION_ERRORS: VendorErrorMessages = VendorErrorMessages {
    tag: "[GEMINI_API_ERROR]",
    config: Some("Invalid API key configuration"),
    not_found: Some("AI model is currently unavailable"),
    rate_limited: Some("Too many requests. Please try again later."),
    fallback: "Internal server error",
};

pub const CODE_ERRORS: VendorErrorMessages = VendorErrorMessages {
    tag: "[CODE_GENERATION_ERROR]",
    config: Some("Invalid API key configuration"),
    not_found: Some("The AI model is currently unavailable"),
    rate_limited: Some("API quota exceeded. Please try again later."),
    fallback: "Failed to generate code",
};

pub const MUSIC_ERRORS: VendorErrorMessages = VendorErrorMessages {
    tag: "[REPLICATE_MUSIC_ERROR]",
    config: None,
    not_found: None,
    rate_limited: None,
    fallback: "Music generation failed",
};

/// Video requests never fail on the vendor side; description errors are
/// only logged under this tag.
pub const VIDEO_ERROR_TAG: &str = "[VIDEO_GENERATION_ERROR]";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{message}")]
    Vendor { status: StatusCode, message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest(message.into())
    }

    /// Logs a vendor failure under the endpoint tag and translates it.
    pub fn vendor(err: VendorError, messages: &VendorErrorMessages) -> Self {
        tracing::error!("{} {}", messages.tag, err);

        let mapped = match &err {
            VendorError::Config(_) => messages.config,
            VendorError::NotFound(_) => messages.not_found,
            VendorError::RateLimited(_) => messages.rate_limited,
            VendorError::Unknown(_) => None,
        };

        match mapped {
            Some(message) => AppError::Vendor {
                status: err.status_code(),
                message: message.to_string(),
            },
            None => AppError::Vendor {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: messages.fallback.to_string(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Vendor { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
