//! The façade CRUD handlers call: prompt building, the engine run, and the
//! typed decode, one method per call site.

use serde_json::Value;

use crate::config::GenerationConfig;
use crate::engine::GenerationEngine;
use crate::provider::{GeminiBackend, GenerativeBackend};
use crate::types::{
    PhotoDish, PhotoIngredients, PhotoScanRequest, Recipe, RecipeRequest, ShoppingListRequest,
    ShoppingPlan,
};
use crate::{Error, Result};

/// Generation service shared by every request handler.
///
/// Construction happens once at startup; the instance is immutable and safe
/// to share across concurrent requests. Generic over the backend so tests
/// can drive it without a network.
pub struct RecipeAi<B = GeminiBackend> {
    engine: GenerationEngine<B>,
}

impl RecipeAi<GeminiBackend> {
    /// Build the service against the real Gemini backend.
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let backend = GeminiBackend::new(&config)?;
        Ok(Self::with_backend(backend, &config))
    }
}

impl<B: GenerativeBackend> RecipeAi<B> {
    /// Build the service over any backend (tests, alternative providers).
    pub fn with_backend(backend: B, config: &GenerationConfig) -> Self {
        Self {
            engine: GenerationEngine::new(backend, config),
        }
    }

    /// Generate a recipe from a free-text list of ingredients.
    pub async fn recipe_from_ingredients(&self, request: &RecipeRequest) -> Result<Recipe> {
        let value = self.engine.run(&request.to_generation_request()).await?;
        decode(value)
    }

    /// Identify the dish in a photo and reconstruct its recipe.
    pub async fn recipe_from_photo(&self, scan: &PhotoScanRequest) -> Result<PhotoDish> {
        let value = self.engine.run(&scan.to_dish_request()).await?;
        decode(value)
    }

    /// Recognize the ingredients in a photo and suggest recipes for them.
    pub async fn ingredients_from_photo(
        &self,
        scan: &PhotoScanRequest,
    ) -> Result<PhotoIngredients> {
        let value = self.engine.run(&scan.to_ingredients_request()).await?;
        decode(value)
    }

    /// Plan a multi-day shopping list from the user's cooking history.
    pub async fn shopping_list(&self, request: &ShoppingListRequest) -> Result<ShoppingPlan> {
        let value = self.engine.run(&request.to_generation_request()?).await?;
        decode(value)
    }

    pub fn engine(&self) -> &GenerationEngine<B> {
        &self.engine
    }
}

/// Decode a normalized value into its typed model.
///
/// Mandatory fields are already guaranteed and every other typed field
/// defaults, so this only fails on a type-shape mismatch; the serialized
/// value is preserved the same way the normalizer preserves raw text.
fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
    let raw = value.to_string();
    serde_json::from_value(value).map_err(|source| Error::Parse { raw, source })
}
