//! Generated recipe model, matching the JSON contract the recipe prompt
//! pins.

use serde::{Deserialize, Serialize};

/// A required ingredient with its amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default = "default_true")]
    pub required: bool,
}

/// A nice-to-have ingredient: improves the dish but the recipe works
/// without it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionalIngredient {
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub required: bool,
}

/// A generated recipe.
///
/// `title`, `ingredients_list` and `steps` are guaranteed by the normalizer;
/// everything else defaults when the model omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
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
    pub servings: String,
    pub ingredients_list: Vec<Ingredient>,
    #[serde(default)]
    pub optional_ingredients: Vec<OptionalIngredient>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub tips: String,
    #[serde(default)]
    pub equipment: String,
}

fn default_true() -> bool {
    true
}
