use pantrychef_core::domain::recipe::value_objects::{
    AddFavoriteInput, DEFAULT_SERVINGS, GenerateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeRequest {
    pub profile_id: Uuid,

    /// Omit to cook from the profile's pantry.
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,

    #[serde(default)]
    #[validate(length(max = 100, message = "cuisine_type must be at most 100 characters"))]
    pub cuisine_type: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, message = "max_cooking_time must be at least 1 minute"))]
    #[schema(example = 30)]
    pub max_cooking_time: Option<u32>,

    #[serde(default)]
    pub dietary_preferences: Option<Vec<String>>,

    #[serde(default)]
    pub available_utensils: Option<Vec<String>>,

    #[serde(default)]
    pub disliked_ingredients: Option<Vec<String>>,

    #[serde(default = "default_servings")]
    #[validate(range(min = 1, max = 50, message = "servings must be between 1 and 50"))]
    #[schema(example = 2)]
    pub servings: u32,
}

impl From<GenerateRecipeRequest> for GenerateRecipeInput {
    fn from(request: GenerateRecipeRequest) -> Self {
        Self {
            profile_id: request.profile_id,
            ingredients: request.ingredients,
            cuisine_type: request.cuisine_type,
            max_cooking_time: request.max_cooking_time,
            dietary_preferences: request.dietary_preferences,
            available_utensils: request.available_utensils,
            disliked_ingredients: request.disliked_ingredients,
            servings: request.servings,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddFavoriteRequest {
    pub profile_id: Uuid,
    pub recipe_id: Uuid,

    #[serde(default)]
    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

impl From<AddFavoriteRequest> for AddFavoriteInput {
    fn from(request: AddFavoriteRequest) -> Self {
        Self {
            profile_id: request.profile_id,
            recipe_id: request.recipe_id,
            notes: request.notes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, IntoParams, Validate, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetRecipesParams {
    #[validate(range(min = 1, max = 200, message = "limit must be between 1 and 200"))]
    #[schema(example = 50)]
    pub limit: Option<u64>,
}
