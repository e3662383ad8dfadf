//! Provider boundary: the backend trait the engine runs against, and the
//! status classification that keeps retry policy independent of
//! provider-specific error shapes.

pub mod gemini;

pub use gemini::GeminiBackend;

use crate::types::PromptPayload;
use crate::{Error, Result};
use async_trait::async_trait;

/// One upstream generative provider.
///
/// Two operations, matching the two network interactions the pipeline makes:
/// probe the live catalog, and run one generation attempt. Implementations
/// classify their own failures into crate errors so the engine never inspects
/// provider wire formats.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Fetch the model identifiers currently usable with the configured
    /// credentials. Names may carry the provider's structural prefix; the
    /// catalog strips it.
    async fn list_models(&self) -> Result<Vec<String>>;

    /// One generation attempt against `model`, returning the reply text.
    async fn generate(&self, model: &str, payload: &PromptPayload) -> Result<String>;
}

/// Classify an upstream error status into a crate error.
///
/// 503 and 529 are the overload signals providers use for "temporarily at
/// capacity, retry later"; everything else is non-retryable here.
pub(crate) fn classify(status: u16, body: &str) -> Error {
    let message = error_message(body);
    match status {
        503 | 529 => Error::Overloaded { status, message },
        _ => Error::Call {
            status,
            class: class_for_status(status),
            message,
        },
    }
}

fn class_for_status(status: u16) -> &'static str {
    match status {
        400 => "invalid_request",
        401 => "authentication",
        403 => "permission_denied",
        404 => "not_found",
        408 => "timeout",
        409 => "conflict",
        413 => "request_too_large",
        429 => "rate_limited",
        500 => "server_error",
        504 => "timeout",
        _ => "unknown",
    }
}

/// Pull the human-readable message out of a provider error body, falling
/// back to the (truncated) body itself when it is not the usual shape.
fn error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json
            .pointer("/error/message")
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.chars().count() > 512 {
        let cut: String = trimmed.chars().take(512).collect();
        format!("{cut}…")
    } else {
        trimmed.to_string()
    }
}
