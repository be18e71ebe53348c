use std::collections::HashSet;

use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    inventory::ports::InventoryRepository,
    recipe::{
        entities::{FavoriteRecipe, ProfileRecipe, Recipe, RecipeFavorite},
        ingredients::resolve_ingredients,
        parser::parse_recipe_response,
        ports::{LLMClient, RecipeFavoriteRepository, RecipeRepository, RecipeService},
        prompt::{RecipePromptParams, build_recipe_prompt},
        value_objects::{
            AddFavoriteInput, DEFAULT_RECIPE_LIMIT, FavoriteKey, GenerateRecipeInput,
            GetRecipesInput,
        },
    },
};

impl<IR, RR, RF, LLM, HC> RecipeService for Service<IR, RR, RF, LLM, HC>
where
    IR: InventoryRepository,
    RR: RecipeRepository,
    RF: RecipeFavoriteRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(profile_id = %input.profile_id))]
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<Recipe, CoreError> {
        // 1. Resolve ingredients
        let ingredients = resolve_ingredients(
            &self.inventory_repository,
            input.profile_id,
            input.ingredients.as_deref(),
        )
        .await?;

        // 2. Build prompt
        let prompt = build_recipe_prompt(&RecipePromptParams::new(&ingredients, &input));

        // 3. Call LLM
        let raw_response = self
            .llm_client
            .generate_with_text(prompt)
            .await
            .map_err(|e| {
                error!("Recipe generation failed: {}", e);
                match e {
                    CoreError::GenerationUnavailable(_) => e,
                    other => CoreError::GenerationUnavailable(other.to_string()),
                }
            })?;

        // 4. Parse and validate response
        let parsed = parse_recipe_response(&raw_response)?;

        // 5. Persist
        let recipe = self
            .recipe_repository
            .create_recipe(Recipe::generated(input.profile_id, parsed))
            .await?;

        info!(recipe_id = %recipe.id, "Generated recipe \"{}\"", recipe.title);

        Ok(recipe)
    }

    #[instrument(skip(self, input), fields(profile_id = %input.profile_id))]
    async fn get_recipes_by_profile(
        &self,
        input: GetRecipesInput,
    ) -> Result<Vec<ProfileRecipe>, CoreError> {
        let recipes = self
            .recipe_repository
            .list_by_profile(input.profile_id, input.limit.unwrap_or(DEFAULT_RECIPE_LIMIT))
            .await?;

        let favorite_ids: HashSet<Uuid> = self
            .recipe_favorite_repository
            .list_by_profile(input.profile_id)
            .await?
            .into_iter()
            .map(|f| f.favorite.recipe_id)
            .collect();

        Ok(recipes
            .into_iter()
            .map(|recipe| ProfileRecipe {
                is_favorite: favorite_ids.contains(&recipe.id),
                recipe,
            })
            .collect())
    }

    async fn get_recipe(&self, recipe_id: Uuid) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_by_id(recipe_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<(), CoreError> {
        if !self.recipe_repository.delete_recipe(recipe_id).await? {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    #[instrument(skip(self, input), fields(profile_id = %input.profile_id, recipe_id = %input.recipe_id))]
    async fn add_favorite(&self, input: AddFavoriteInput) -> Result<RecipeFavorite, CoreError> {
        self.recipe_repository
            .get_by_id(input.recipe_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let favorite = RecipeFavorite::new(input.profile_id, input.recipe_id, input.notes);

        self.recipe_favorite_repository
            .upsert_if_absent(favorite)
            .await
    }

    async fn remove_favorite(&self, input: FavoriteKey) -> Result<(), CoreError> {
        let removed = self
            .recipe_favorite_repository
            .delete_favorite(input.profile_id, input.recipe_id)
            .await?;

        if !removed {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }

    async fn get_favorites(&self, profile_id: Uuid) -> Result<Vec<FavoriteRecipe>, CoreError> {
        self.recipe_favorite_repository
            .list_by_profile(profile_id)
            .await
    }

    async fn is_favorited(&self, input: FavoriteKey) -> Result<bool, CoreError> {
        self.recipe_favorite_repository
            .exists(input.profile_id, input.recipe_id)
            .await
    }
}
