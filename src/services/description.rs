// src/services/description.rs
use std::time::Duration;

use super::{GenerateRequest, TextGenerator};
use crate::error::VendorError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 3, delay: Duration::from_secs(5) }
    }
}

pub fn description_prompt(prompt: &str) -> String {
    format!("Describe a video of: {prompt}")
}

/// Asks the vendor for a description of the requested video.
///
/// Rate-limited attempts are retried after `policy.delay`, up to
/// `policy.max_attempts` in total; running out yields `Ok(None)`. Any other
/// failure is returned at once.
pub async fn describe_video(
    generator: &dyn TextGenerator,
    prompt: &str,
    policy: RetryPolicy,
) -> Result<Option<String>, VendorError> {
    let request = GenerateRequest::prompt(description_prompt(prompt));

    for attempt in 1..=policy.max_attempts {
        match generator.generate(request.clone()).await {
            Ok(text) => return Ok(Some(text)),
            Err(e) if e.is_rate_limited() => {
                if attempt == policy.max_attempts {
                    tracing::warn!("Rate limited on final attempt {attempt}, giving up on description");
                    break;
                }
                tracing::warn!("Rate limited. Retrying attempt {}...", attempt + 1);
                tokio::time::sleep(policy.delay).await;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(None)
}
