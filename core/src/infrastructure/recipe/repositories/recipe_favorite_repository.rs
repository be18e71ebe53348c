use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    sea_query::OnConflict,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::{FavoriteRecipe, Recipe, RecipeFavorite},
            ports::RecipeFavoriteRepository,
        },
    },
    entity::{
        recipe_favorites::{
            ActiveModel as FavoriteActiveModel, Column as FavoriteColumn, Entity as FavoriteEntity,
        },
        recipes::Entity as RecipeEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeFavoriteRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeFavoriteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_one(
        &self,
        profile_id: Uuid,
        recipe_id: Uuid,
    ) -> Result<Option<RecipeFavorite>, CoreError> {
        let favorite = FavoriteEntity::find()
            .filter(FavoriteColumn::ProfileId.eq(profile_id))
            .filter(FavoriteColumn::RecipeId.eq(recipe_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe favorite: {}", e);
                CoreError::InternalServerError
            })?
            .map(RecipeFavorite::from);

        Ok(favorite)
    }
}

impl RecipeFavoriteRepository for PostgresRecipeFavoriteRepository {
    async fn upsert_if_absent(&self, favorite: RecipeFavorite) -> Result<RecipeFavorite, CoreError> {
        // A conflicting insert is a no-op; the stored row is read back either way.
        FavoriteEntity::insert(FavoriteActiveModel {
            id: Set(favorite.id),
            profile_id: Set(favorite.profile_id),
            recipe_id: Set(favorite.recipe_id),
            notes: Set(favorite.notes.clone()),
            created_at: Set(favorite.created_at.fixed_offset()),
        })
        .on_conflict(
            OnConflict::columns([FavoriteColumn::ProfileId, FavoriteColumn::RecipeId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to add recipe favorite: {}", e);
            CoreError::PersistenceFailure(e.to_string())
        })?;

        self.find_one(favorite.profile_id, favorite.recipe_id)
            .await?
            .ok_or_else(|| {
                error!(
                    "Favorite for profile {} and recipe {} vanished after insert",
                    favorite.profile_id, favorite.recipe_id
                );
                CoreError::InternalServerError
            })
    }

    async fn delete_favorite(&self, profile_id: Uuid, recipe_id: Uuid) -> Result<bool, CoreError> {
        let result = FavoriteEntity::delete_many()
            .filter(FavoriteColumn::ProfileId.eq(profile_id))
            .filter(FavoriteColumn::RecipeId.eq(recipe_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to remove recipe favorite: {}", e);
                CoreError::PersistenceFailure(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }

    async fn exists(&self, profile_id: Uuid, recipe_id: Uuid) -> Result<bool, CoreError> {
        Ok(self.find_one(profile_id, recipe_id).await?.is_some())
    }

    async fn list_by_profile(&self, profile_id: Uuid) -> Result<Vec<FavoriteRecipe>, CoreError> {
        let rows = FavoriteEntity::find()
            .filter(FavoriteColumn::ProfileId.eq(profile_id))
            .find_also_related(RecipeEntity)
            .order_by_desc(FavoriteColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list recipe favorites: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(favorite, recipe)| {
                Some(FavoriteRecipe {
                    favorite: RecipeFavorite::from(favorite),
                    recipe: Recipe::from(recipe?),
                })
            })
            .collect())
    }
}
