use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::Recipe, ports::RecipeRepository},
    },
    entity::recipes::{ActiveModel as RecipeActiveModel, Column as RecipeColumn, Entity as RecipeEntity},
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let active_model = RecipeActiveModel::try_from(&recipe)?;

        let created = RecipeEntity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map(Recipe::from)
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::PersistenceFailure(e.to_string())
            })?;

        Ok(created)
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let recipe = RecipeEntity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?
            .map(Recipe::from);

        Ok(recipe)
    }

    async fn list_by_profile(&self, profile_id: Uuid, limit: u64) -> Result<Vec<Recipe>, CoreError> {
        let recipes = RecipeEntity::find()
            .filter(RecipeColumn::ProfileId.eq(profile_id))
            .order_by_desc(RecipeColumn::CreatedAt)
            .order_by_desc(RecipeColumn::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(recipes.into_iter().map(Recipe::from).collect())
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<bool, CoreError> {
        let result = RecipeEntity::delete_by_id(recipe_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete recipe: {}", e);
                CoreError::PersistenceFailure(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}
