//! Photo-analysis result models.

use crate::types::recipe::Ingredient;
use serde::{Deserialize, Serialize};

/// A dish recognized from a photo, with its reconstructed recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDish {
    pub dish_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub total_time: String,
    #[serde(default)]
    pub servings: String,
    pub ingredients_list: Vec<Ingredient>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub tips: String,
    #[serde(default)]
    pub equipment: String,
}

/// One recipe suggestion built from ingredients seen in a photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedRecipe {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub total_time: String,
    #[serde(default)]
    pub ingredients_list: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tips: String,
}

/// Ingredients recognized in a photo plus what to cook with them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoIngredients {
    #[serde(default)]
    pub detected_ingredients: Vec<String>,
    pub suggested_recipes: Vec<SuggestedRecipe>,
}
