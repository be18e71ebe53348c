use sea_orm::ActiveValue::Set;
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::entities::{Recipe, RecipeFavorite},
    },
    entity::{recipe_favorites, recipes},
};

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        Self {
            id: model.id,
            profile_id: model.profile_id,
            title: model.title.clone(),
            cuisine_type: model.cuisine_type.clone(),
            cooking_time: model.cooking_time,
            difficulty: model.difficulty.clone(),
            servings: model.servings,
            ingredients: serde_json::from_value(model.ingredients.clone()).unwrap_or_default(),
            instructions: model.instructions.clone(),
            utensils_required: model
                .utensils_required
                .clone()
                .and_then(|v| serde_json::from_value(v).ok()),
            nutritional_info: model
                .nutritional_info
                .clone()
                .and_then(|v| serde_json::from_value(v).ok()),
            image_url: model.image_url.clone(),
            generated_by_ai: model.generated_by_ai,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}

impl TryFrom<&Recipe> for recipes::ActiveModel {
    type Error = CoreError;

    fn try_from(recipe: &Recipe) -> Result<Self, Self::Error> {
        let to_json = |value: serde_json::Result<serde_json::Value>| {
            value.map_err(|e| {
                error!("Failed to serialize recipe column: {}", e);
                CoreError::PersistenceFailure(e.to_string())
            })
        };

        Ok(Self {
            id: Set(recipe.id),
            profile_id: Set(recipe.profile_id),
            title: Set(recipe.title.clone()),
            cuisine_type: Set(recipe.cuisine_type.clone()),
            cooking_time: Set(recipe.cooking_time),
            difficulty: Set(recipe.difficulty.clone()),
            servings: Set(recipe.servings),
            ingredients: Set(to_json(serde_json::to_value(&recipe.ingredients))?),
            instructions: Set(recipe.instructions.clone()),
            utensils_required: Set(recipe
                .utensils_required
                .as_ref()
                .map(|u| to_json(serde_json::to_value(u)))
                .transpose()?),
            nutritional_info: Set(recipe
                .nutritional_info
                .as_ref()
                .map(|n| to_json(serde_json::to_value(n)))
                .transpose()?),
            image_url: Set(recipe.image_url.clone()),
            generated_by_ai: Set(recipe.generated_by_ai),
            created_at: Set(recipe.created_at.fixed_offset()),
        })
    }
}

impl From<&recipe_favorites::Model> for RecipeFavorite {
    fn from(model: &recipe_favorites::Model) -> Self {
        Self {
            id: model.id,
            profile_id: model.profile_id,
            recipe_id: model.recipe_id,
            notes: model.notes.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<recipe_favorites::Model> for RecipeFavorite {
    fn from(model: recipe_favorites::Model) -> Self {
        Self::from(&model)
    }
}
