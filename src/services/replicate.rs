// src/services/replicate.rs
use async_trait::async_trait;
use reqwest::{Client, header};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

use super::AudioGenerator;
use crate::error::VendorError;

const POLL_INTERVAL: Duration = Duration::from_secs(1);
const MAX_POLLS: usize = 60;

#[derive(Debug, Deserialize)]
struct Prediction {
    status: String,
    #[serde(default)]
    output: Value,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    urls: Option<PredictionUrls>,
}

#[derive(Debug, Deserialize)]
struct PredictionUrls {
    get: Option<String>,
}

impl Prediction {
    fn is_terminal(&self) -> bool {
        matches!(self.status.as_str(), "succeeded" | "failed" | "canceled")
    }
}

/// Music generation through Replicate predictions.
pub struct ReplicateClient {
    client: Client,
    base_url: String,
    version: String,
    api_key: Option<String>,
    poll_interval: Duration,
}

impl ReplicateClient {
    pub fn new(
        base_url: impl Into<String>,
        version: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, VendorError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            version: version.into(),
            api_key,
            poll_interval: POLL_INTERVAL,
        })
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    async fn read_prediction(resp: reqwest::Response) -> Result<Prediction, VendorError> {
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
                .unwrap_or(text);
            return Err(VendorError::from_status(status, format!("[{}] {}", status.as_u16(), message)));
        }
        Ok(resp.json().await?)
    }

    async fn wait_for(&self, api_key: &str, mut prediction: Prediction) -> Result<Prediction, VendorError> {
        let mut polls = 0;
        while !prediction.is_terminal() {
            let url = prediction
                .urls
                .as_ref()
                .and_then(|u| u.get.clone())
                .ok_or_else(|| VendorError::Unknown("prediction has no status url".into()))?;
            if polls == MAX_POLLS {
                return Err(VendorError::Unknown(format!(
                    "prediction still {} after {} polls",
                    prediction.status, MAX_POLLS
                )));
            }
            polls += 1;
            tokio::time::sleep(self.poll_interval).await;

            let resp = self.client.get(&url).bearer_auth(api_key).send().await?;
            prediction = Self::read_prediction(resp).await?;
        }
        Ok(prediction)
    }
}

/// Reduces a prediction output to its audio URL: an array yields its first
/// element's `audio`, an object its own `audio`.
pub fn normalize_audio_output(output: &Value) -> Option<String> {
    let item = match output {
        Value::Array(items) => items.first()?,
        other => other,
    };
    item.get("audio").and_then(|a| a.as_str()).map(str::to_string)
}

#[async_trait]
impl AudioGenerator for ReplicateClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, VendorError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| VendorError::Config("Replicate API key is not set".into()))?;

        let body = json!({
            "version": self.version,
            "input": { "prompt_b": prompt }
        });

        let resp = self
            .client
            .post(format!("{}/v1/predictions", self.base_url))
            .header(header::CONTENT_TYPE, "application/json")
            .header("Prefer", "wait")
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let prediction = Self::read_prediction(resp).await?;
        let prediction = self.wait_for(api_key, prediction).await?;

        match prediction.status.as_str() {
            "succeeded" => Ok(normalize_audio_output(&prediction.output)),
            status => {
                let reason = prediction
                    .error
                    .map(|e| e.as_str().map(str::to_string).unwrap_or_else(|| e.to_string()))
                    .unwrap_or_else(|| format!("prediction {status}"));
                Err(VendorError::classify(reason))
            }
        }
    }
}
