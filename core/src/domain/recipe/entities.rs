use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
}

/// Structured recipe recovered from a model response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParsedRecipe {
    pub title: String,
    pub cuisine_type: Option<String>,
    pub cooking_time: Option<i32>,
    pub difficulty: Option<String>, // usually 'easy' | 'medium' | 'hard'
    pub servings: Option<i32>,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: String,
    pub utensils_required: Option<Vec<String>>,
    pub nutritional_info: Option<BTreeMap<String, String>>,
}

impl ParsedRecipe {
    /// Placeholder record used when the response carries no readable structure.
    /// The raw text is kept verbatim as the instructions.
    pub fn fallback(raw_response: &str) -> Self {
        Self {
            title: "Custom Recipe".to_string(),
            cuisine_type: Some("Mixed".to_string()),
            cooking_time: Some(30),
            difficulty: Some("medium".to_string()),
            servings: Some(2),
            ingredients: vec![RecipeIngredient {
                name: "Various ingredients".to_string(),
                quantity: "as needed".to_string(),
                unit: String::new(),
            }],
            instructions: raw_response.to_string(),
            utensils_required: Some(vec!["Basic kitchen tools".to_string()]),
            nutritional_info: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub title: String,
    pub cuisine_type: Option<String>,
    pub cooking_time: Option<i32>,
    pub difficulty: Option<String>,
    pub servings: Option<i32>,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: String,
    pub utensils_required: Option<Vec<String>>,
    pub nutritional_info: Option<BTreeMap<String, String>>,
    pub image_url: Option<String>,
    pub generated_by_ai: bool,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Recipe produced by the generation pipeline.
    pub fn generated(profile_id: Uuid, parsed: ParsedRecipe) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            profile_id,
            title: parsed.title,
            cuisine_type: parsed.cuisine_type,
            cooking_time: parsed.cooking_time,
            difficulty: parsed.difficulty,
            servings: parsed.servings,
            ingredients: parsed.ingredients,
            instructions: parsed.instructions,
            utensils_required: parsed.utensils_required,
            nutritional_info: parsed.nutritional_info,
            image_url: None,
            generated_by_ai: true,
            created_at: now,
        }
    }
}

/// A recipe as listed for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeFavorite {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub recipe_id: Uuid,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RecipeFavorite {
    pub fn new(profile_id: Uuid, recipe_id: Uuid, notes: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            profile_id,
            recipe_id,
            notes,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteRecipe {
    #[serde(flatten)]
    pub favorite: RecipeFavorite,
    pub recipe: Recipe,
}
