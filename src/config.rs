//! Process-lifetime generation configuration.
//!
//! Immutable after construction: the engine and backend borrow it, nothing
//! mutates it. One instance is shared by every concurrent request.

use crate::{Error, Result};
use keyring::Entry;
use std::env;

/// Default Gemini API base (v1 REST surface).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";

/// Ordered model preference list, best first. An externally configured
/// identifier (env or builder) is prepended, never substituted.
pub const DEFAULT_PREFERRED_MODELS: [&str; 5] = [
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-1.5-flash-8b",
    "gemini-1.5-flash",
    "gemini-1.5-pro",
];

/// Configuration for the generation core.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    base_url: String,
    api_key: String,
    preferred: Vec<String>,
}

impl GenerationConfig {
    /// Build a config with an explicit API key and the default preference
    /// list.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            preferred: DEFAULT_PREFERRED_MODELS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }

    /// Build a config from the process environment.
    ///
    /// The credential is looked up in the OS keyring first
    /// (`recipeforge`/`gemini`), then the `GEMINI_API_KEY` variable. A
    /// `GEMINI_MODEL` variable, when set and non-empty, is prepended to the
    /// preference list.
    pub fn from_env() -> Result<Self> {
        let api_key = Self::lookup_api_key().ok_or_else(|| Error::Validation {
            message: "no API key: set GEMINI_API_KEY or store one in the keyring".to_string(),
        })?;

        let mut config = Self::new(api_key);
        if let Ok(model) = env::var("GEMINI_MODEL") {
            if !model.is_empty() {
                config = config.with_preferred_model(model);
            }
        }
        Ok(config)
    }

    fn lookup_api_key() -> Option<String> {
        if let Ok(entry) = Entry::new("recipeforge", "gemini") {
            if let Ok(key) = entry.get_password() {
                return Some(key);
            }
        }
        env::var("GEMINI_API_KEY").ok()
    }

    /// Prepend one model identifier to the preference list. The default
    /// order stays intact behind it.
    pub fn with_preferred_model(mut self, model: impl Into<String>) -> Self {
        self.preferred.insert(0, model.into());
        self
    }

    /// Override the provider base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The ordered preference list, best first.
    pub fn preferred_models(&self) -> &[String] {
        &self.preferred
    }
}
