// src/services/gemini.rs
use async_trait::async_trait;
use reqwest::{Client, header};
use serde_json::{Value, json};
use std::time::Duration;

use super::{GenerateRequest, TextGenerator};
use crate::error::VendorError;

/// Text generation against the Gemini `generateContent` API.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, VendorError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    fn request_body(req: &GenerateRequest) -> Value {
        let mut body = json!({ "contents": req.contents });
        if req.code_execution {
            body["tools"] = json!([{ "codeExecution": {} }]);
        }
        body
    }
}

/// Concatenates the text parts of the first candidate.
pub fn extract_text(v: &Value) -> Result<String, VendorError> {
    let parts = v
        .pointer("/candidates/0/content/parts")
        .and_then(|x| x.as_array())
        .ok_or_else(|| VendorError::Unknown("response contained no candidates".into()))?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(VendorError::Unknown("response contained no text".into()));
    }
    Ok(text)
}

/// Pulls `error.message` out of a Gemini error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, req: GenerateRequest) -> Result<String, VendorError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| VendorError::Config("Gemini API key is not set".into()))?;

        tracing::debug!(model = %self.model, code_execution = req.code_execution, "gemini generateContent");

        let resp = self
            .client
            .post(self.endpoint())
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-goog-api-key", api_key)
            .json(&Self::request_body(&req))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(VendorError::from_status(
                status,
                format!("[{}] {}", status.as_u16(), error_message(&text)),
            ));
        }

        let v: Value = resp.json().await?;
        extract_text(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Content;

    #[test]
    fn code_execution_adds_tool() {
        let body = GeminiClient::request_body(&GenerateRequest::with_code_execution(vec![
            Content::user_text("print 1"),
        ]));
        assert_eq!(body["tools"], json!([{ "codeExecution": {} }]));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "print 1");

        let body = GeminiClient::request_body(&GenerateRequest::prompt("hi"));
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn extract_text_joins_parts() {
        let v = json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "a" },
                    { "executableCode": { "code": "1+1" } },
                    { "text": "b" }
                ]}
            }]
        });
        assert_eq!(extract_text(&v).unwrap(), "ab");
    }

    #[test]
    fn extract_text_without_candidates_fails() {
        assert!(matches!(extract_text(&json!({ "candidates": [] })), Err(VendorError::Unknown(_))));
    }

    #[test]
    fn error_message_reads_vendor_body() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(body), "API key not valid.");
        assert_eq!(error_message("plain"), "plain");
    }
}
