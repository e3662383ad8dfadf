//! Request and response domain models.
//!
//! ## Overview
//!
//! Response-side structs mirror the camelCase JSON contract the prompts pin
//! on the model. Every field the normalizer does not guarantee is defaulted,
//! so a typed decode never fails on an absent optional.
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`request`] | Generation requests, payloads, schema tags |
//! | [`profile`] | User dietary profile and recipe constraints |
//! | [`recipe`] | Generated recipe model |
//! | [`photo`] | Photo-analysis result models |
//! | [`shopping`] | Shopping-list plan models |

pub mod photo;
pub mod profile;
pub mod recipe;
pub mod request;
pub mod shopping;

pub use photo::{PhotoDish, PhotoIngredients, SuggestedRecipe};
pub use profile::{DietaryPreference, Difficulty, PriceRange, TimeRange, UserProfile};
pub use recipe::{Ingredient, OptionalIngredient, Recipe};
pub use request::{
    GenerationRequest, ImageData, PhotoScanRequest, PromptPayload, RecipeRequest, SchemaTag,
    ShoppingListRequest,
};
pub use shopping::{ShoppingCategory, ShoppingItem, ShoppingPlan};
