use crate::{
    domain::common::{PantryChefConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        inventory::PostgresInventoryRepository,
        llm::GeminiLLMClient,
        recipe::{PostgresRecipeFavoriteRepository, PostgresRecipeRepository},
    },
};

pub type PantryChefService = Service<
    PostgresInventoryRepository,
    PostgresRecipeRepository,
    PostgresRecipeFavoriteRepository,
    GeminiLLMClient,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: PantryChefConfig) -> Result<PantryChefService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig::from(&config.database)).await?;

    let inventory_repository = PostgresInventoryRepository::new(postgres.get_db());
    let recipe_repository = PostgresRecipeRepository::new(postgres.get_db());
    let recipe_favorite_repository = PostgresRecipeFavoriteRepository::new(postgres.get_db());
    let health_check_repository = PostgresHealthCheckRepository::new(postgres.get_db());
    let llm_client = GeminiLLMClient::new(config.llm.gemini_api_key, config.llm.gemini_model);

    Ok(Service::new(
        inventory_repository,
        recipe_repository,
        recipe_favorite_repository,
        llm_client,
        health_check_repository,
    ))
}
