//! Ingredients-to-recipe prompt.

use crate::prompt::{push_allergy_section, push_dietary_section};
use crate::types::{GenerationRequest, PromptPayload, RecipeRequest, SchemaTag};
use std::fmt::Write as _;

impl RecipeRequest {
    /// Build the generation request for this recipe ask.
    pub fn to_generation_request(&self) -> GenerationRequest {
        GenerationRequest::new(
            PromptPayload::text(self.prompt_text()),
            SchemaTag::Recipe,
        )
    }

    fn prompt_text(&self) -> String {
        let servings_text = format!("{} people", self.servings);

        let mut prompt = format!(
            "You are a friendly cook who specializes in simple, fast, tasty recipes \
             for students and young people.\n\n\
             MAIN INGREDIENTS on hand: {ingredients}\n\n\
             KEY REQUIREMENTS (CHOSEN BY THE USER):\n\
             1. Difficulty: {difficulty}\n   - {difficulty_requirement}\n\n\
             2. Cooking time: {time_range}\n   - {time_requirement}\n   \
             - You MUST make sure the times in the result (prepTime, cookTime, \
             totalTime) match this requirement exactly.\n\n\
             3. Number of people: {servings_text}\n   - Portions must fit exactly \
             {servings_text}. Scale the ingredients for that many.\n\n\
             OTHER REQUIREMENTS:\n\
             4. Equipment: only basic tools like a pan, a pot, a knife and a cutting \
             board. Avoid professional or expensive equipment.\n\
             5. Ingredients: make the most of what is on hand. Only add common, easy \
             to buy, cheap extras.\n\
             6. Budget: keep the dish cheap and waste nothing.",
            ingredients = self.ingredients,
            difficulty = self.difficulty,
            difficulty_requirement = self.difficulty.requirement(),
            time_range = self.time_range,
            time_requirement = self.time_range.requirement(),
        );

        push_dietary_section(&mut prompt, &self.profile, 7);
        push_allergy_section(&mut prompt, &self.profile);

        let _ = write!(
            prompt,
            r#"

Return the result as JSON with exactly this structure (NO markdown, plain JSON only):
{{
  "title": "Dish name (appealing, easy to remember)",
  "description": "Short description of the dish (2-3 sentences), highlighting what makes it great for students (fast, simple, tasty)",
  "difficulty": "Must be exactly '{difficulty}' (do not change it)",
  "prepTime": "Preparation time (e.g. '10 minutes') - must fit the {time_range} requirement",
  "cookTime": "Cooking time (e.g. '20 minutes') - must fit the {time_range} requirement",
  "totalTime": "Total time from prep to done - MUST land exactly inside {time_range}",
  "servings": "Must be exactly '{servings_text}'",
  "ingredientsList": [
    {{
      "name": "Ingredient name (from the list on hand)",
      "amount": "Quantity (e.g. '200g', '2 tablespoons', '1 piece')",
      "required": true
    }}
  ],
  "optionalIngredients": [
    {{
      "name": "Optional ingredient (nicer with it, fine without)",
      "amount": "Quantity (e.g. '1 teaspoon', 'a few leaves', 'to taste')",
      "purpose": "What it is for (e.g. 'deeper flavor', 'garnish')",
      "required": false
    }}
  ],
  "steps": [
    "Step 1: detailed, easy-to-follow instruction",
    "Step 2: clear description of what to do"
  ],
  "tips": "Useful small tips for this dish (saving time, saving gas, storing leftovers...)",
  "equipment": "Tools needed (basic only, e.g. 'Pan, knife, cutting board')"
}}

IMPORTANT NOTES:
- Make MAXIMUM use of the ingredients already on hand: {ingredients}
- If extra staples are needed (salt, sugar, fish sauce...), put them in "optionalIngredients" with a clear purpose
- "optionalIngredients" are things that make the dish better but are NOT required - the dish must work with the main ingredients alone
- The steps must be VERY detailed and beginner-friendly
- If an ingredient conflicts with the dietary regimen or an allergy, substitute it or propose an entirely different dish"#,
            difficulty = self.difficulty,
            time_range = self.time_range,
            servings_text = servings_text,
            ingredients = self.ingredients,
        );

        prompt
    }
}
