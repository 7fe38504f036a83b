// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::error::VendorError;
use crate::services::{
    AudioGenerator, TextGenerator, description::RetryPolicy, gemini::GeminiClient,
    replicate::ReplicateClient,
};

pub type SharedState = Arc<AppState>;

/// Vendor clients the handlers call, one per adapter.
pub struct AppState {
    pub conversation: Arc<dyn TextGenerator>,
    pub code: Arc<dyn TextGenerator>,
    pub video_description: Arc<dyn TextGenerator>,
    pub music: Arc<dyn AudioGenerator>,
    pub retry: RetryPolicy,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, VendorError> {
        let text = Arc::new(GeminiClient::new(
            &config.gemini_base_url,
            &config.gemini_model,
            config.gemini_api_key.clone(),
            config.vendor_timeout,
        )?);
        let video_description = Arc::new(GeminiClient::new(
            &config.gemini_base_url,
            &config.video_description_model,
            config.google_api_key.clone(),
            config.vendor_timeout,
        )?);
        let music = Arc::new(ReplicateClient::new(
            &config.replicate_base_url,
            &config.music_model_version,
            config.replicate_api_key.clone(),
            config.vendor_timeout,
        )?);

        Ok(Self {
            conversation: text.clone(),
            code: text,
            video_description,
            music,
            retry: RetryPolicy::default(),
        })
    }
}
