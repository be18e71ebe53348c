use crate::domain::{
    health::ports::HealthCheckRepository,
    inventory::ports::InventoryRepository,
    recipe::ports::{LLMClient, RecipeFavoriteRepository, RecipeRepository},
};

/// Stateless service namespace; every collaborator is injected.
#[derive(Clone)]
pub struct Service<IR, RR, RF, LLM, HC>
where
    IR: InventoryRepository,
    RR: RecipeRepository,
    RF: RecipeFavoriteRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub(crate) inventory_repository: IR,
    pub(crate) recipe_repository: RR,
    pub(crate) recipe_favorite_repository: RF,
    pub(crate) llm_client: LLM,
    pub(crate) health_check_repository: HC,
}

impl<IR, RR, RF, LLM, HC> Service<IR, RR, RF, LLM, HC>
where
    IR: InventoryRepository,
    RR: RecipeRepository,
    RF: RecipeFavoriteRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    pub fn new(
        inventory_repository: IR,
        recipe_repository: RR,
        recipe_favorite_repository: RF,
        llm_client: LLM,
        health_check_repository: HC,
    ) -> Self {
        Self {
            inventory_repository,
            recipe_repository,
            recipe_favorite_repository,
            llm_client,
            health_check_repository,
        }
    }
}
