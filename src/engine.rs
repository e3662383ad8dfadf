//! The retry/backoff/fallback state machine around one generation call.
//!
//! One run: resolve a model, attempt it up to the length of the backoff
//! schedule while the provider reports overload, then fall back to a freshly
//! resolved alternate model for exactly one more attempt. Non-retryable
//! errors abort immediately. Overload is expected and self-resolving on a
//! timescale of seconds, so the waits are short and fixed; permanent errors
//! cannot succeed on retry, so they are never retried.
//!
//! Each run owns its exclusion set and attempt counters; concurrent runs
//! share nothing mutable.

use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};
use uuid::Uuid;

use crate::catalog::ModelCatalog;
use crate::config::GenerationConfig;
use crate::normalize::normalize;
use crate::provider::GenerativeBackend;
use crate::resolver::resolve;
use crate::types::GenerationRequest;
use crate::Result;

/// Fixed waits applied after each overloaded attempt against the primary
/// model. The schedule length is also the attempt budget for that model.
const BACKOFF_SCHEDULE: [Duration; 3] = [
    Duration::from_millis(500),
    Duration::from_millis(1000),
    Duration::from_millis(2000),
];

/// Drives resolution, attempts, backoff and fallback for one backend.
///
/// The primary model gets the full schedule; the fallback model gets a
/// single attempt with no further backoff.
pub struct GenerationEngine<B> {
    backend: B,
    preferred: Vec<String>,
}

impl<B: GenerativeBackend> GenerationEngine<B> {
    pub fn new(backend: B, config: &GenerationConfig) -> Self {
        Self {
            backend,
            preferred: config.preferred_models().to_vec(),
        }
    }

    /// Run one generation request end to end: model resolution, the attempt
    /// loop, and normalization of the reply against the request's schema.
    pub async fn run(&self, request: &GenerationRequest) -> Result<serde_json::Value> {
        let raw = self.run_raw(request).await?;
        normalize(&raw, request.schema)
    }

    /// The attempt loop, returning the raw reply text.
    pub async fn run_raw(&self, request: &GenerationRequest) -> Result<String> {
        let request_id = Uuid::new_v4().to_string();
        let mut excluded: Vec<String> = Vec::new();

        let model = self.resolve_model(&excluded).await?;

        for (attempt, delay) in BACKOFF_SCHEDULE.iter().enumerate() {
            match self.backend.generate(&model, &request.payload).await {
                Ok(text) => {
                    info!(
                        request_id = request_id.as_str(),
                        model = model.as_str(),
                        attempt = attempt + 1,
                        schema = request.schema.as_str(),
                        "generation succeeded"
                    );
                    return Ok(text);
                }
                Err(err) if err.is_overloaded() => {
                    warn!(
                        request_id = request_id.as_str(),
                        model = model.as_str(),
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "model overloaded, backing off"
                    );
                    sleep(*delay).await;
                }
                Err(err) => {
                    warn!(
                        request_id = request_id.as_str(),
                        model = model.as_str(),
                        attempt = attempt + 1,
                        error = %err,
                        "non-retryable error, aborting"
                    );
                    return Err(err);
                }
            }
        }

        // Schedule exhausted and still overloaded: one attempt against an
        // alternate model, never a second fallback.
        excluded.push(model);

        let fallback = match self.resolve_model(&excluded).await {
            Ok(model) => model,
            Err(err) => {
                warn!(
                    request_id = request_id.as_str(),
                    error = %err,
                    "fallback resolution failed"
                );
                return Err(err);
            }
        };

        info!(
            request_id = request_id.as_str(),
            model = fallback.as_str(),
            "falling back to alternate model"
        );
        match self.backend.generate(&fallback, &request.payload).await {
            Ok(text) => Ok(text),
            Err(err) => {
                warn!(
                    request_id = request_id.as_str(),
                    model = fallback.as_str(),
                    error = %err,
                    "fallback attempt failed"
                );
                Err(err)
            }
        }
    }

    /// Probe the live catalog and pick the best preferred, non-excluded
    /// model. The catalog is re-queried on every resolution; availability
    /// stays current at the cost of one extra round trip.
    async fn resolve_model(&self, excluded: &[String]) -> Result<String> {
        let listing = self.backend.list_models().await?;
        let catalog = ModelCatalog::from_listing(listing);
        let model = resolve(&catalog, &self.preferred, excluded)?;
        info!(model, "selected generation model");
        Ok(model.to_string())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
