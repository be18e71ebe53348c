use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{FavoriteRecipe, ProfileRecipe, Recipe, RecipeFavorite},
        value_objects::{AddFavoriteInput, FavoriteKey, GenerateRecipeInput, GetRecipesInput},
    },
};

/// Repository trait for generated recipes
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    /// Single atomic insert; returns the stored row.
    fn create_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    /// Most recent first.
    fn list_by_profile(
        &self,
        profile_id: Uuid,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn delete_recipe(&self, recipe_id: Uuid)
    -> impl Future<Output = Result<bool, CoreError>> + Send;
}

/// Repository trait for recipe favorites
#[cfg_attr(test, mockall::automock)]
pub trait RecipeFavoriteRepository: Send + Sync {
    /// Inserts the favorite unless the (profile, recipe) pair already exists,
    /// in which case the existing row is returned untouched.
    fn upsert_if_absent(
        &self,
        favorite: RecipeFavorite,
    ) -> impl Future<Output = Result<RecipeFavorite, CoreError>> + Send;

    fn delete_favorite(
        &self,
        profile_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn exists(
        &self,
        profile_id: Uuid,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Favorites joined with their recipe, most recent first.
    fn list_by_profile(
        &self,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FavoriteRecipe>, CoreError>> + Send;
}

/// Text-in/text-out access to the generative model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for recipe generation and curation
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_recipes_by_profile(
        &self,
        input: GetRecipesInput,
    ) -> impl Future<Output = Result<Vec<ProfileRecipe>, CoreError>> + Send;

    fn get_recipe(&self, recipe_id: Uuid)
    -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn delete_recipe(&self, recipe_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn add_favorite(
        &self,
        input: AddFavoriteInput,
    ) -> impl Future<Output = Result<RecipeFavorite, CoreError>> + Send;

    fn remove_favorite(
        &self,
        input: FavoriteKey,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_favorites(
        &self,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<Vec<FavoriteRecipe>, CoreError>> + Send;

    fn is_favorited(
        &self,
        input: FavoriteKey,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
