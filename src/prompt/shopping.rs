//! Shopping-list planning prompt.

use crate::prompt::{push_allergy_section, push_dietary_section};
use crate::types::{GenerationRequest, PromptPayload, SchemaTag, ShoppingListRequest};
use crate::{Error, Result};
use std::fmt::Write as _;

impl ShoppingListRequest {
    /// Build the generation request for this plan. Plans run 1–7 days;
    /// anything else is rejected before any network call.
    pub fn to_generation_request(&self) -> Result<GenerationRequest> {
        if self.days < 1 || self.days > 7 {
            return Err(Error::Validation {
                message: format!("days must be between 1 and 7, got {}", self.days),
            });
        }
        Ok(GenerationRequest::new(
            PromptPayload::text(self.prompt_text()),
            SchemaTag::ShoppingList,
        ))
    }

    fn prompt_text(&self) -> String {
        let pantry = self.pantry.join(", ");

        let mut prompt = format!(
            "You are a nutrition expert and a smart shopping planner. Build an OPTIMAL \
             shopping list for {days} days based on the following:\n\n\
             USER INFORMATION:\n\
             1. The user usually cooks with these ingredients (from their history): {pantry}\n\n\
             2. Days to shop for: {days} days\n\n\
             3. Number of people: {servings}",
            days = self.days,
            pantry = pantry,
            servings = self.servings,
        );

        if let Some(range) = &self.price_range {
            let _ = write!(
                prompt,
                "\n\nPRICE LIMIT: the total cost must stay between {min} and {max}. \
                 Prefer reasonably priced ingredients and size the quantities so the \
                 budget is not exceeded.",
                min = range.min,
                max = range.max,
            );
        }

        push_dietary_section(&mut prompt, &self.profile, 4);
        push_allergy_section(&mut prompt, &self.profile);

        let budget_line = if self.price_range.is_some() {
            "\n7. CALCULATE CAREFULLY: make sure the estimated total cost stays within the given budget"
        } else {
            ""
        };

        let _ = write!(
            prompt,
            r#"

SHOPPING LIST REQUIREMENTS:
1. Group the list by category (produce, meat and fish, spices, dry goods...)
2. Size quantities for {days} days and {servings} people (no big surplus, no shortage)
3. Prefer common, easy to buy, cheap ingredients
4. Lean on what the user already cooks with: {pantry}
5. Suggest dishes that can be cooked from the list
6. Include basic staples if any are missing{budget_line}

Return the result as JSON with exactly this structure (NO markdown, plain JSON only):
{{
  "shoppingList": [
    {{
      "category": "Category name (e.g. Produce, Meat and fish, Spices, Dry goods...)",
      "items": [
        {{
          "name": "Ingredient name",
          "amount": "Quantity (e.g. '500g', '2 bags', '1 box')",
          "essential": true
        }}
      ]
    }}
  ],
  "suggestedRecipes": [
    "Dishes that can be cooked from the list (at most 5, one short sentence each)"
  ],
  "totalEstimatedCost": "Estimated cost (e.g. '500,000 - 700,000 VND')",
  "tips": "Tips for saving money while shopping and storing the food"
}}"#,
            days = self.days,
            servings = self.servings,
            pantry = pantry,
            budget_line = budget_line,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{PriceRange, SchemaTag, ShoppingListRequest};
    use crate::Error;

    #[test]
    fn valid_request_carries_the_shopping_schema() {
        let request = ShoppingListRequest::new()
            .with_days(3)
            .to_generation_request()
            .unwrap();
        assert_eq!(request.schema, SchemaTag::ShoppingList);
        assert!(request.payload.prompt_text().contains("3 days"));
    }

    #[test]
    fn out_of_range_days_are_rejected() {
        for days in [0u8, 8] {
            let err = ShoppingListRequest::new()
                .with_days(days)
                .to_generation_request()
                .unwrap_err();
            assert!(matches!(err, Error::Validation { .. }));
        }
    }

    #[test]
    fn budget_shows_up_when_set() {
        let request = ShoppingListRequest::new()
            .with_price_range(PriceRange::new(500_000, 700_000))
            .to_generation_request()
            .unwrap();
        let text = request.payload.prompt_text();
        assert!(text.contains("PRICE LIMIT"));
        assert!(text.contains("500000"));
        assert!(text.contains("CALCULATE CAREFULLY"));
    }

    #[test]
    fn pantry_history_is_inlined() {
        let request = ShoppingListRequest::new()
            .with_pantry(vec!["rice".to_string(), "fish sauce".to_string()])
            .to_generation_request()
            .unwrap();
        assert!(request.payload.prompt_text().contains("rice, fish sauce"));
    }
}
