use crate::types::SchemaTag;
use thiserror::Error;

/// Unified error type for the generation core.
///
/// Every failure the pipeline can produce is a value of this enum; nothing in
/// the crate panics or aborts the hosting process. Retry policy keys off
/// [`Error::is_overloaded`]: only transient overload is ever retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The provider's model-listing endpoint returned a non-success status.
    /// Terminal for the resolution attempt; the caller decides whether the
    /// whole request is worth repeating.
    #[error("model listing failed with HTTP {status}")]
    CatalogUnavailable { status: u16 },

    /// No preferred, non-excluded model is currently usable. Surfaces to the
    /// end user as service-unavailable, not as something to retry.
    #[error("no preferred model available (found: {found})")]
    NoModelAvailable { found: String },

    /// The provider signalled temporary capacity exhaustion. Retryable.
    #[error("model overloaded: HTTP {status}: {message}")]
    Overloaded { status: u16, message: String },

    /// Any other upstream call failure. Never retried: repeating a bad
    /// request or an auth failure only wastes latency.
    #[error("generation call failed: HTTP {status} ({class}): {message}")]
    Call {
        status: u16,
        class: &'static str,
        message: String,
    },

    /// The model's reply could not be parsed as JSON. The raw text is kept
    /// so the caller can log or display it.
    #[error("response is not valid JSON: {source}")]
    Parse {
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// Parsed JSON is missing a field the schema tag declares mandatory.
    #[error("response missing required field `{field}` for the {schema} schema")]
    Schema { schema: SchemaTag, field: &'static str },

    /// Caller-side input rejected before any network call.
    #[error("invalid input: {message}")]
    Validation { message: String },

    /// Network-level failure from the HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Whether this error is the transient-overload signal the retry
    /// schedule applies to. Everything else aborts the attempt loop.
    pub fn is_overloaded(&self) -> bool {
        matches!(self, Error::Overloaded { .. })
    }

    /// The raw model reply, when this error preserved one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Parse { raw, .. } => Some(raw),
            _ => None,
        }
    }
}
