// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_REPLICATE_BASE_URL: &str = "https://api.replicate.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_VIDEO_DESCRIPTION_MODEL: &str = "gemini-1.5-pro-latest";
pub const DEFAULT_MUSIC_MODEL_VERSION: &str =
    "8cf61ea6c56afd61d8f5b9ffd14d7c216c0a93844ce2d82ac1c9ecc9c7f24e05";
pub const DEFAULT_VENDOR_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub gemini_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub replicate_api_key: Option<String>,
    pub gemini_base_url: String,
    pub replicate_base_url: String,
    pub gemini_model: String,
    pub video_description_model: String,
    pub music_model_version: String,
    pub vendor_timeout: Duration,
}

// Keys stay out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_addr", &self.bind_addr)
            .field("gemini_api_key", &self.gemini_api_key.is_some())
            .field("google_api_key", &self.google_api_key.is_some())
            .field("replicate_api_key", &self.replicate_api_key.is_some())
            .field("gemini_base_url", &self.gemini_base_url)
            .field("replicate_base_url", &self.replicate_base_url)
            .field("gemini_model", &self.gemini_model)
            .field("video_description_model", &self.video_description_model)
            .field("vendor_timeout", &self.vendor_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw
            .parse()
            .map_err(|_| ConfigError::Invalid { name: "BIND_ADDR", value: bind_raw.clone() })?;

        let vendor_timeout = match get("VENDOR_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid { name: "VENDOR_TIMEOUT_SECS", value: raw })?,
            None => Duration::from_secs(DEFAULT_VENDOR_TIMEOUT_SECS),
        };

        Ok(Self {
            bind_addr,
            gemini_api_key: get("GEMINI_API_KEY"),
            google_api_key: get("GOOGLE_API_KEY"),
            replicate_api_key: get("REPLICATE_API_KEY"),
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            replicate_base_url: get("REPLICATE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_REPLICATE_BASE_URL.to_string()),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            video_description_model: get("VIDEO_DESCRIPTION_MODEL")
                .unwrap_or_else(|| DEFAULT_VIDEO_DESCRIPTION_MODEL.to_string()),
            music_model_version: get("MUSIC_MODEL_VERSION")
                .unwrap_or_else(|| DEFAULT_MUSIC_MODEL_VERSION.to_string()),
            vendor_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(cfg.video_description_model, DEFAULT_VIDEO_DESCRIPTION_MODEL);
        assert_eq!(cfg.vendor_timeout, Duration::from_secs(120));
        assert!(cfg.gemini_api_key.is_none());
    }

    #[test]
    fn empty_key_is_missing() {
        let cfg = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "  "), ("REPLICATE_API_KEY", "r8_x")]))
            .unwrap();
        assert!(cfg.gemini_api_key.is_none());
        assert_eq!(cfg.replicate_api_key.as_deref(), Some("r8_x"));
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = Config::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(err.to_string().contains("BIND_ADDR"));
    }

    #[test]
    fn debug_hides_keys() {
        let cfg = Config::from_lookup(lookup(&[("GEMINI_API_KEY", "secret-value")])).unwrap();
        assert!(!format!("{cfg:?}").contains("secret-value"));
    }
}
