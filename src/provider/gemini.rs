//! Google Gemini generateContent backend.
//!
//! Wire-format notes:
//! - The API key travels as a `?key=` query parameter, not in headers.
//! - Requests use `contents` with `parts`; inline images are a
//!   `inline_data` part `{mime_type, data}` next to the text part.
//! - Reply text sits at `candidates[0].content.parts[0].text`.
//! - The listing endpoint returns fully-qualified names (`models/<id>`).

use async_trait::async_trait;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::types::PromptPayload;
use crate::{Error, Result};

use super::{classify, GenerativeBackend};

/// Gemini REST backend over one pooled HTTP client.
///
/// Stateless across requests; every attempt is bounded by the client
/// timeout, so a hung upstream call cannot outlive a caller's deadline by
/// more than that.
pub struct GeminiBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiBackend {
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        // Production-friendly default, env-overridable.
        let timeout_secs = env::var("RECIPEFORGE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .pool_max_idle_per_host(32)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_key: config.api_key().to_string(),
        })
    }

    /// Build the `contents` array for one user turn.
    fn payload_to_contents(payload: &PromptPayload) -> Value {
        let parts = match payload {
            PromptPayload::Text(text) => json!([{ "text": text }]),
            PromptPayload::TextWithImage { text, image } => json!([
                { "text": text },
                {
                    "inline_data": {
                        "mime_type": image.mime_type,
                        "data": image.data,
                    }
                }
            ]),
        };
        json!([{ "role": "user", "parts": parts }])
    }

    fn extract_text(body: &Value) -> Option<String> {
        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(String::from)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/models", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(Error::CatalogUnavailable {
                status: resp.status().as_u16(),
            });
        }

        let body: Value = resp.json().await?;
        let names: Vec<String> = body
            .get("models")
            .and_then(|m| m.as_array())
            .map(|models| {
                models
                    .iter()
                    .filter_map(|m| m.get("name").and_then(|n| n.as_str()))
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        debug!(count = names.len(), "listed available models");
        Ok(names)
    }

    async fn generate(&self, model: &str, payload: &PromptPayload) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let body = json!({ "contents": Self::payload_to_contents(payload) });

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let error_body = resp.text().await.unwrap_or_default();
            return Err(classify(status.as_u16(), &error_body));
        }

        let reply: Value = resp.json().await?;
        Self::extract_text(&reply).ok_or_else(|| Error::Call {
            status: status.as_u16(),
            class: "unknown",
            message: "reply contained no text candidate".to_string(),
        })
    }
}
