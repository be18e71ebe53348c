use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    inventory::ports::InventoryRepository,
    recipe::ports::{LLMClient, RecipeFavoriteRepository, RecipeRepository},
};

impl<IR, RR, RF, LLM, HC> HealthCheckService for Service<IR, RR, RF, LLM, HC>
where
    IR: InventoryRepository,
    RR: RecipeRepository,
    RF: RecipeFavoriteRepository,
    LLM: LLMClient,
    HC: HealthCheckRepository,
{
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let latency_ms = self.health_check_repository.health().await?;

        Ok(DatabaseHealthStatus {
            status: "healthy".to_string(),
            latency_ms,
        })
    }
}
