//! # recipeforge
//!
//! Resilient AI-generation core for recipe and shopping-list backends.
//!
//! This crate is the generation pipeline a recipe service embeds: it picks an
//! upstream generative model out of an ordered preference list filtered
//! against live availability, retries and falls back when the provider
//! reports transient overload, and normalizes the free-form textual reply
//! into a validated, typed result.
//!
//! ## Overview
//!
//! A caller builds one of the four request flavors (ingredients → recipe,
//! dish photo → recipe, ingredients photo → suggestions, pantry history →
//! shopping list), hands it to [`RecipeAi`], and gets back a typed value or a
//! typed error. Persistence, HTTP routing, and authentication are the
//! embedding server's business; nothing in here touches them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use recipeforge::{GenerationConfig, RecipeAi, RecipeRequest};
//!
//! #[tokio::main]
//! async fn main() -> recipeforge::Result<()> {
//!     let config = GenerationConfig::from_env()?;
//!     let ai = RecipeAi::new(config)?;
//!
//!     let request = RecipeRequest::new("eggs, rice, spring onions");
//!     let recipe = ai.recipe_from_ingredients(&request).await?;
//!     println!("{}", recipe.title);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Process-lifetime configuration: credentials, preference list |
//! | [`catalog`] | Model catalog built from the provider's listing endpoint |
//! | [`resolver`] | Deterministic preference-list model selection |
//! | [`engine`] | Retry/backoff/fallback state machine around one generation call |
//! | [`normalize`] | Fence stripping, JSON parsing, schema validation and defaults |
//! | [`provider`] | Backend trait and the Gemini HTTP implementation |
//! | [`prompt`] | Prompt builders for the four generation flavors |
//! | [`types`] | Request and response domain models |
//! | [`service`] | The façade CRUD handlers call |

pub mod catalog;
pub mod config;
pub mod engine;
pub mod normalize;
pub mod prompt;
pub mod provider;
pub mod resolver;
pub mod service;
pub mod types;

// Re-export main types for convenience
pub use catalog::ModelCatalog;
pub use config::{GenerationConfig, DEFAULT_PREFERRED_MODELS};
pub use engine::GenerationEngine;
pub use provider::{GeminiBackend, GenerativeBackend};
pub use service::RecipeAi;
pub use types::{
    Difficulty, DietaryPreference, GenerationRequest, ImageData, PhotoDish, PhotoIngredients,
    PriceRange, PromptPayload, Recipe, RecipeRequest, SchemaTag, ShoppingListRequest,
    ShoppingPlan, TimeRange, UserProfile,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
