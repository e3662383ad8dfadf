//! Reply normalization: fence stripping, JSON parsing, and per-schema
//! validation with fixed defaults.
//!
//! The upstream model is told to answer with plain JSON but wraps it in
//! markdown code fences often enough, and not always consistently, that the
//! markers are removed globally before parsing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};
use std::borrow::Cow;

use crate::types::SchemaTag;
use crate::{Error, Result};

static JSON_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\n?").expect("fence regex"));
static BARE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```\n?").expect("fence regex"));

/// Equipment text used when the model omits one.
const DEFAULT_EQUIPMENT: &str = "Pan or pot, knife, cutting board (basic tools)";

/// Normalize a raw model reply into validated structured data.
///
/// Parse failures carry the original text so callers can log or surface it;
/// it is never swallowed. Validation failures name the missing mandatory
/// field.
pub fn normalize(raw: &str, schema: SchemaTag) -> Result<Value> {
    let text = raw.trim();
    let cleaned = strip_fences(text);

    let mut value: Value =
        serde_json::from_str(cleaned.as_ref()).map_err(|source| Error::Parse {
            raw: raw.to_string(),
            source,
        })?;

    apply_schema(&mut value, schema)?;
    Ok(value)
}

/// Remove markdown code-fence markers when the reply starts fenced.
///
/// All markers are stripped throughout the text, open and close, with or
/// without the language annotation. The model sometimes closes a `json`
/// fence with a bare one.
fn strip_fences(text: &str) -> Cow<'_, str> {
    if text.starts_with("```json") {
        let without_json = JSON_FENCE.replace_all(text, "");
        Cow::Owned(BARE_FENCE.replace_all(&without_json, "").into_owned())
    } else if text.starts_with("```") {
        BARE_FENCE.replace_all(text, "")
    } else {
        Cow::Borrowed(text)
    }
}

/// Check mandatory fields and fill fixed defaults for the given schema.
fn apply_schema(value: &mut Value, schema: SchemaTag) -> Result<()> {
    match schema {
        SchemaTag::Recipe => {
            require(value, schema, "title")?;
            require(value, schema, "ingredientsList")?;
            require(value, schema, "steps")?;
            default_field(value, "optionalIngredients", json!([]));
            default_field(value, "equipment", json!(DEFAULT_EQUIPMENT));
            default_field(value, "difficulty", json!("Easy"));
        }
        SchemaTag::PhotoRecipe => {
            require(value, schema, "dishName")?;
            require(value, schema, "ingredientsList")?;
            require(value, schema, "steps")?;
            default_field(value, "equipment", json!(DEFAULT_EQUIPMENT));
            default_field(value, "difficulty", json!("Easy"));
        }
        SchemaTag::PhotoIngredients => {
            require(value, schema, "suggestedRecipes")?;
            default_field(value, "detectedIngredients", json!([]));
        }
        SchemaTag::ShoppingList => {
            require(value, schema, "shoppingList")?;
            if !value["shoppingList"].is_array() {
                return Err(Error::Schema {
                    schema,
                    field: "shoppingList",
                });
            }
            default_field(value, "suggestedRecipes", json!([]));
        }
    }
    Ok(())
}

fn require(value: &Value, schema: SchemaTag, field: &'static str) -> Result<()> {
    match value.get(field) {
        Some(v) if !v.is_null() => Ok(()),
        _ => Err(Error::Schema { schema, field }),
    }
}

fn default_field(value: &mut Value, field: &str, default: Value) {
    let missing = value.get(field).map_or(true, Value::is_null);
    if missing {
        if let Some(map) = value.as_object_mut() {
            map.insert(field.to_string(), default);
        }
    }
}
