//! Turns raw model output into a [`ParsedRecipe`].
//!
//! The model is asked for a bare JSON object but frequently wraps it in a
//! markdown fence or ignores the format entirely. Three outcomes exist:
//!
//! * the payload parses and carries `title`, `ingredients` and
//!   `instructions`: it is normalized into a [`ParsedRecipe`];
//! * the payload parses but a required field is missing or unusable:
//!   [`CoreError::InvalidRecipePayload`] naming every such field;
//! * the payload is not a JSON object at all: the fixed
//!   [`ParsedRecipe::fallback`] record carrying the raw text.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{ParsedRecipe, RecipeIngredient},
};

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

/// Interior of the first fenced block, or `None` when the text has no
/// complete opening/closing marker pair.
pub fn extract_fenced_block(text: &str) -> Option<&str> {
    let open = text.find(FENCE)?;
    let after_open = &text[open + FENCE.len()..];
    let body = after_open.strip_prefix(JSON_TAG).unwrap_or(after_open);
    let close = body.find(FENCE)?;

    Some(body[..close].trim())
}

pub fn parse_recipe_response(raw_response: &str) -> Result<ParsedRecipe, CoreError> {
    let candidate = extract_fenced_block(raw_response).unwrap_or(raw_response);

    let object = match serde_json::from_str::<Value>(candidate.trim()) {
        Ok(Value::Object(object)) => object,
        Ok(other) => {
            warn!(
                "Model response is JSON but not an object ({}), using fallback recipe",
                json_kind(&other)
            );
            return Ok(ParsedRecipe::fallback(raw_response));
        }
        Err(e) => {
            warn!("Model response is not valid JSON ({}), using fallback recipe", e);
            return Ok(ParsedRecipe::fallback(raw_response));
        }
    };

    validate_recipe_object(&object)
}

/// Checks the required fields of a decoded payload and normalizes the rest.
fn validate_recipe_object(object: &Map<String, Value>) -> Result<ParsedRecipe, CoreError> {
    let title = object.get("title").and_then(non_empty_text);
    let ingredients = object.get("ingredients").and_then(ingredient_list);
    let instructions = object.get("instructions").and_then(instruction_text);

    let (Some(title), Some(ingredients), Some(instructions)) = (&title, &ingredients, &instructions)
    else {
        let fields = [
            ("title", title.is_none()),
            ("ingredients", ingredients.is_none()),
            ("instructions", instructions.is_none()),
        ]
        .into_iter()
        .filter(|(_, missing)| *missing)
        .map(|(field, _)| field.to_string())
        .collect();

        return Err(CoreError::InvalidRecipePayload { fields });
    };

    Ok(ParsedRecipe {
        title: title.clone(),
        cuisine_type: object.get("cuisine_type").and_then(non_empty_text),
        cooking_time: object.get("cooking_time").and_then(positive_int),
        difficulty: object.get("difficulty").and_then(non_empty_text),
        servings: object.get("servings").and_then(positive_int),
        ingredients: ingredients.clone(),
        instructions: instructions.clone(),
        utensils_required: object.get("utensils_required").and_then(text_list),
        nutritional_info: object.get("nutritional_info").and_then(nutrient_map),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Scalars rendered as text; containers and null have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Whitespace-only text counts as absent; kept text is returned as given.
fn non_empty_text(value: &Value) -> Option<String> {
    scalar_text(value).filter(|s| !s.trim().is_empty())
}

fn positive_int(value: &Value) -> Option<i32> {
    let number = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;

    i32::try_from(number).ok().filter(|n| *n > 0)
}

fn instruction_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Array(steps) => steps
            .iter()
            .filter_map(scalar_text)
            .collect::<Vec<_>>()
            .join("\n"),
        other => scalar_text(other)?,
    };

    Some(text).filter(|t| !t.trim().is_empty())
}

fn ingredient_list(value: &Value) -> Option<Vec<RecipeIngredient>> {
    let Value::Array(entries) = value else {
        return None;
    };

    Some(entries.iter().filter_map(ingredient_entry).collect())
}

fn ingredient_entry(value: &Value) -> Option<RecipeIngredient> {
    match value {
        Value::Object(fields) => {
            let text = |key: &str| fields.get(key).and_then(scalar_text).unwrap_or_default();
            let name = text("name");
            if name.trim().is_empty() {
                return None;
            }

            Some(RecipeIngredient {
                name,
                quantity: text("quantity"),
                unit: text("unit"),
            })
        }
        other => non_empty_text(other).map(|name| RecipeIngredient {
            name,
            quantity: String::new(),
            unit: String::new(),
        }),
    }
}

fn text_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(items.iter().filter_map(non_empty_text).collect()),
        other => non_empty_text(other).map(|item| vec![item]),
    }
}

fn nutrient_map(value: &Value) -> Option<BTreeMap<String, String>> {
    let Value::Object(fields) = value else {
        return None;
    };

    Some(
        fields
            .iter()
            .filter_map(|(nutrient, amount)| Some((nutrient.clone(), scalar_text(amount)?)))
            .collect(),
    )
}
