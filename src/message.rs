// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Assistant,
}

/// One entry of a dashboard chat transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(default)]
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into(), video_url: None }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into(), video_url: None }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// A role-tagged turn in the text vendor's wire format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

impl From<&ChatMessage> for Content {
    fn from(msg: &ChatMessage) -> Self {
        let role = match msg.role {
            Role::User => "user",
            Role::Assistant => "model",
        };
        Self {
            role: role.to_string(),
            parts: vec![Part { text: msg.content.clone() }],
        }
    }
}

#[derive(Deserialize)]
pub struct ConversationRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ConversationResponse {
    pub message: String,
}

#[derive(Deserialize)]
pub struct CodeRequest {
    pub contents: Vec<Content>,
}

impl CodeRequest {
    pub fn from_history(history: &[ChatMessage]) -> Self {
        Self { contents: history.iter().map(Content::from).collect() }
    }
}

#[derive(Serialize, Deserialize)]
pub struct CandidateContent {
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Serialize, Deserialize)]
pub struct CodeResponse {
    pub candidates: Vec<Candidate>,
}

impl CodeResponse {
    pub fn from_text(text: String) -> Self {
        Self {
            candidates: vec![Candidate {
                content: CandidateContent { parts: vec![Part { text }] },
            }],
        }
    }
}

#[derive(Deserialize)]
pub struct MusicRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    /// Only `messages[0].content` is read; any other shape is ignored.
    #[serde(default)]
    pub messages: Option<serde_json::Value>,
}

impl MusicRequest {
    /// `prompt`, falling back to the first message's content.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| {
                self.messages
                    .as_ref()
                    .and_then(|m| m.pointer("/0/content"))
                    .and_then(|c| c.as_str())
            })
    }
}

#[derive(Serialize, Deserialize)]
pub struct MusicResponse {
    pub audio: Option<String>,
}

#[derive(Deserialize)]
pub struct VideoRequest {
    pub prompt: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub message: String,
    pub video_url: String,
    pub description: String,
}

impl From<&VideoResponse> for ChatMessage {
    fn from(resp: &VideoResponse) -> Self {
        Self {
            role: Role::Assistant,
            content: resp.description.clone(),
            video_url: Some(resp.video_url.clone()),
        }
    }
}
