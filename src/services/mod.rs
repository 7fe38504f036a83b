// src/services/mod.rs
pub mod conversation;
pub mod description;
pub mod gemini;
pub mod replicate;
pub mod video_catalog;

use async_trait::async_trait;

use crate::error::VendorError;
use crate::message::Content;

/// Input for one text-generation call.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub code_execution: bool,
}

impl GenerateRequest {
    pub fn prompt(text: impl Into<String>) -> Self {
        Self { contents: vec![Content::user_text(text)], code_execution: false }
    }

    pub fn with_code_execution(contents: Vec<Content>) -> Self {
        Self { contents, code_execution: true }
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, req: GenerateRequest) -> Result<String, VendorError>;
}

/// Audio vendors answer with one optional audio URL, whatever shape the
/// upstream result had.
#[async_trait]
pub trait AudioGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, VendorError>;
}
