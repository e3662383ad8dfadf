//! Generation request types: payloads, schema tags, and the four
//! caller-facing request structs.

use crate::types::profile::{Difficulty, PriceRange, TimeRange, UserProfile};
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label selecting which required/optional field set the normalizer
/// validates the reply against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaTag {
    Recipe,
    PhotoRecipe,
    PhotoIngredients,
    ShoppingList,
}

impl SchemaTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaTag::Recipe => "recipe",
            SchemaTag::PhotoRecipe => "photo-recipe",
            SchemaTag::PhotoIngredients => "photo-ingredients",
            SchemaTag::ShoppingList => "shopping-list",
        }
    }
}

impl fmt::Display for SchemaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline image payload for vision prompts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageData {
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

impl ImageData {
    /// Wrap already-encoded base64 data (the usual case: clients upload
    /// base64 directly).
    pub fn from_base64(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    pub fn jpeg_base64(data: impl Into<String>) -> Self {
        Self::from_base64("image/jpeg", data)
    }
}

/// Prompt content for one generation call: pure text, or text plus one
/// inline image.
#[derive(Debug, Clone)]
pub enum PromptPayload {
    Text(String),
    TextWithImage { text: String, image: ImageData },
}

impl PromptPayload {
    pub fn text(text: impl Into<String>) -> Self {
        PromptPayload::Text(text.into())
    }

    pub fn with_image(text: impl Into<String>, image: ImageData) -> Self {
        PromptPayload::TextWithImage {
            text: text.into(),
            image,
        }
    }

    /// The textual part of the payload.
    pub fn prompt_text(&self) -> &str {
        match self {
            PromptPayload::Text(t) => t,
            PromptPayload::TextWithImage { text, .. } => text,
        }
    }
}

/// One logical generation request: a payload and the schema its reply must
/// satisfy. Owned by a single task; carries no shared state.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub payload: PromptPayload,
    pub schema: SchemaTag,
}

impl GenerationRequest {
    pub fn new(payload: PromptPayload, schema: SchemaTag) -> Self {
        Self { payload, schema }
    }
}

/// Ingredients-to-recipe request.
#[derive(Debug, Clone)]
pub struct RecipeRequest {
    /// Free-text list of the ingredients on hand.
    pub ingredients: String,
    pub difficulty: Difficulty,
    pub time_range: TimeRange,
    /// How many people the dish should serve.
    pub servings: u8,
    pub profile: UserProfile,
}

impl RecipeRequest {
    pub fn new(ingredients: impl Into<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            difficulty: Difficulty::Easy,
            time_range: TimeRange::Standard,
            servings: 2,
            profile: UserProfile::default(),
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = time_range;
        self
    }

    pub fn with_servings(mut self, servings: u8) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }
}

/// Photo-analysis request, for both scan modes.
#[derive(Debug, Clone)]
pub struct PhotoScanRequest {
    pub image: ImageData,
}

impl PhotoScanRequest {
    pub fn new(image: ImageData) -> Self {
        Self { image }
    }
}

/// Shopping-list planning request.
#[derive(Debug, Clone)]
pub struct ShoppingListRequest {
    /// Plan length; must be between 1 and 7.
    pub days: u8,
    pub servings: u8,
    pub price_range: Option<PriceRange>,
    /// Ingredients the user cooks with most, mined from their history.
    pub pantry: Vec<String>,
    pub profile: UserProfile,
}

impl ShoppingListRequest {
    pub fn new() -> Self {
        Self {
            days: 7,
            servings: 2,
            price_range: None,
            pantry: Vec::new(),
            profile: UserProfile::default(),
        }
    }

    pub fn with_days(mut self, days: u8) -> Self {
        self.days = days;
        self
    }

    pub fn with_servings(mut self, servings: u8) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn with_pantry(mut self, pantry: Vec<String>) -> Self {
        self.pantry = pantry;
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }
}

impl Default for ShoppingListRequest {
    fn default() -> Self {
        Self::new()
    }
}
