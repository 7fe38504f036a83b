// src/observability.rs
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info,reqwest=warn";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON lines; anything else is compact text.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// `RUST_LOG` when set and valid, else [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn init_tracing() {
    let format = LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref());
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter()).with_target(false);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}
