//! Shopping-list plan models.

use serde::{Deserialize, Serialize};

/// One item to buy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub essential: bool,
}

/// A store-section grouping of items (produce, meat and fish, spices, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
}

/// A generated multi-day shopping plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingPlan {
    pub shopping_list: Vec<ShoppingCategory>,
    #[serde(default)]
    pub suggested_recipes: Vec<String>,
    #[serde(default)]
    pub total_estimated_cost: String,
    #[serde(default)]
    pub tips: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_categorized_plan() {
        let value = json!({
            "shoppingList": [
                {
                    "category": "Produce",
                    "items": [{"name": "spring onions", "amount": "1 bunch", "essential": true}]
                }
            ],
            "suggestedRecipes": ["Fried rice"],
            "totalEstimatedCost": "120,000 - 150,000 VND"
        });
        let plan: ShoppingPlan = serde_json::from_value(value).unwrap();
        assert_eq!(plan.shopping_list[0].category, "Produce");
        assert!(plan.shopping_list[0].items[0].essential);
        assert_eq!(plan.suggested_recipes.len(), 1);
        assert!(plan.tips.is_empty());
    }
}
