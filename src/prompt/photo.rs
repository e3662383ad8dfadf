//! Photo-analysis prompts: dish identification and ingredient scanning.

use crate::types::{GenerationRequest, PhotoScanRequest, PromptPayload, SchemaTag};

const DISH_PROMPT: &str = r#"Analyze this photo of a dish and provide:
1. The dish name
2. Its recipe (detailed, easy to follow for a beginner)
3. The ingredients needed
4. The steps to make it

Return JSON (NO markdown, plain JSON only):
{
  "dishName": "Name of the dish",
  "description": "Short description of the dish",
  "difficulty": "Difficulty (Easy/Medium/Hard)",
  "prepTime": "Preparation time (e.g. '15 minutes')",
  "cookTime": "Cooking time (e.g. '30 minutes')",
  "totalTime": "Total time (e.g. '45 minutes')",
  "servings": "Servings (e.g. '2-3 people')",
  "ingredientsList": [
    {
      "name": "Ingredient name",
      "amount": "Quantity (e.g. '200g', '2 tablespoons')",
      "required": true
    }
  ],
  "steps": [
    "Step 1: detailed instruction",
    "Step 2: detailed instruction"
  ],
  "tips": "Small tips for this dish",
  "equipment": "Tools needed"
}"#;

const INGREDIENTS_PROMPT: &str = r#"Analyze the ingredients visible in this photo and provide:
1. The list of ingredients you can identify
2. 3-5 recipes that can be cooked with them
3. For each recipe: its name, a description, and any extra ingredients needed

Return JSON (NO markdown, plain JSON only):
{
  "detectedIngredients": [
    "Ingredient 1",
    "Ingredient 2"
  ],
  "suggestedRecipes": [
    {
      "title": "Dish name",
      "description": "Short description",
      "difficulty": "Difficulty",
      "prepTime": "Preparation time",
      "cookTime": "Cooking time",
      "totalTime": "Total time",
      "ingredientsList": [
        {
          "name": "Ingredient name",
          "amount": "Quantity",
          "required": true
        }
      ],
      "steps": [
        "Step 1: ...",
        "Step 2: ..."
      ],
      "tips": "Small tips"
    }
  ]
}"#;

impl PhotoScanRequest {
    /// Identify the pictured dish and reconstruct its recipe.
    pub fn to_dish_request(&self) -> GenerationRequest {
        GenerationRequest::new(
            PromptPayload::with_image(DISH_PROMPT, self.image.clone()),
            SchemaTag::PhotoRecipe,
        )
    }

    /// Recognize pictured ingredients and suggest recipes for them.
    pub fn to_ingredients_request(&self) -> GenerationRequest {
        GenerationRequest::new(
            PromptPayload::with_image(INGREDIENTS_PROMPT, self.image.clone()),
            SchemaTag::PhotoIngredients,
        )
    }
}
