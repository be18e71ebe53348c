//! In-memory doubles for the pipeline ports.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    inventory::{entities::InventoryItem, ports::InventoryRepository},
    recipe::{
        entities::{FavoriteRecipe, Recipe, RecipeFavorite},
        ports::{LLMClient, RecipeFavoriteRepository, RecipeRepository},
    },
};

pub type TestService = Service<
    InMemoryInventoryRepository,
    InMemoryRecipeRepository,
    InMemoryRecipeFavoriteRepository,
    FakeLLMClient,
    NoopHealthCheckRepository,
>;

#[derive(Clone, Default)]
pub struct InMemoryInventoryRepository {
    items: Arc<Mutex<Vec<InventoryItem>>>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryInventoryRepository {
    pub fn with_items(profile_id: Uuid, items: &[(&str, f64)]) -> Self {
        let now = Utc::now();
        let items = items
            .iter()
            .map(|(name, quantity)| InventoryItem {
                id: Uuid::new_v4(),
                profile_id,
                name: name.to_string(),
                quantity: *quantity,
                unit: "piece".to_string(),
                category: None,
                expiry_date: None,
                created_at: now,
                updated_at: now,
            })
            .collect();

        Self {
            items: Arc::new(Mutex::new(items)),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl InventoryRepository for InMemoryInventoryRepository {
    async fn list_items_for_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<InventoryItem>, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .filter(|item| item.profile_id == profile_id)
            .cloned()
            .collect())
    }
}

/// Keeps recipes in insertion order; listing walks it backwards.
#[derive(Clone, Default)]
pub struct InMemoryRecipeRepository {
    recipes: Arc<Mutex<Vec<Recipe>>>,
    fail_writes: bool,
}

impl InMemoryRecipeRepository {
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.lock().unwrap().len()
    }

    fn find(&self, recipe_id: Uuid) -> Option<Recipe> {
        self.recipes
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == recipe_id)
            .cloned()
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        if self.fail_writes {
            return Err(CoreError::PersistenceFailure("disk full".to_string()));
        }

        self.recipes.lock().unwrap().push(recipe.clone());
        Ok(recipe)
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        Ok(self.find(recipe_id))
    }

    async fn list_by_profile(&self, profile_id: Uuid, limit: u64) -> Result<Vec<Recipe>, CoreError> {
        Ok(self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|r| r.profile_id == profile_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn delete_recipe(&self, recipe_id: Uuid) -> Result<bool, CoreError> {
        let mut recipes = self.recipes.lock().unwrap();
        let before = recipes.len();
        recipes.retain(|r| r.id != recipe_id);
        Ok(recipes.len() != before)
    }
}

/// Favorites store enforcing one row per (profile, recipe); joins against
/// the recipe double it was linked to.
#[derive(Clone, Default)]
pub struct InMemoryRecipeFavoriteRepository {
    favorites: Arc<Mutex<Vec<RecipeFavorite>>>,
    recipes: InMemoryRecipeRepository,
}

impl InMemoryRecipeFavoriteRepository {
    pub fn linked_to(recipes: &InMemoryRecipeRepository) -> Self {
        Self {
            favorites: Arc::default(),
            recipes: recipes.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.favorites.lock().unwrap().len()
    }
}

impl RecipeFavoriteRepository for InMemoryRecipeFavoriteRepository {
    async fn upsert_if_absent(&self, favorite: RecipeFavorite) -> Result<RecipeFavorite, CoreError> {
        let mut favorites = self.favorites.lock().unwrap();

        if let Some(existing) = favorites
            .iter()
            .find(|f| f.profile_id == favorite.profile_id && f.recipe_id == favorite.recipe_id)
        {
            return Ok(existing.clone());
        }

        favorites.push(favorite.clone());
        Ok(favorite)
    }

    async fn delete_favorite(&self, profile_id: Uuid, recipe_id: Uuid) -> Result<bool, CoreError> {
        let mut favorites = self.favorites.lock().unwrap();
        let before = favorites.len();
        favorites.retain(|f| !(f.profile_id == profile_id && f.recipe_id == recipe_id));
        Ok(favorites.len() != before)
    }

    async fn exists(&self, profile_id: Uuid, recipe_id: Uuid) -> Result<bool, CoreError> {
        Ok(self
            .favorites
            .lock()
            .unwrap()
            .iter()
            .any(|f| f.profile_id == profile_id && f.recipe_id == recipe_id))
    }

    async fn list_by_profile(&self, profile_id: Uuid) -> Result<Vec<FavoriteRecipe>, CoreError> {
        let favorites = self.favorites.lock().unwrap().clone();

        Ok(favorites
            .into_iter()
            .rev()
            .filter(|f| f.profile_id == profile_id)
            .filter_map(|favorite| {
                let recipe = self.recipes.find(favorite.recipe_id)?;
                Some(FavoriteRecipe { favorite, recipe })
            })
            .collect())
    }
}

/// Generation double that records every prompt it receives.
#[derive(Clone)]
pub struct FakeLLMClient {
    response: String,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl FakeLLMClient {
    pub fn responding(response: &str) -> Self {
        Self {
            response: response.to_string(),
            prompts: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

impl LLMClient for FakeLLMClient {
    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        self.prompts.lock().unwrap().push(prompt);

        Ok(self.response.clone())
    }
}

#[derive(Clone)]
pub struct NoopHealthCheckRepository;

impl HealthCheckRepository for NoopHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(0)
    }
}
