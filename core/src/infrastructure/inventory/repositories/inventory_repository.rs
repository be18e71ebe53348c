use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        inventory::{entities::InventoryItem, ports::InventoryRepository},
    },
    entity::inventory_items,
};

#[derive(Debug, Clone)]
pub struct PostgresInventoryRepository {
    pub db: DatabaseConnection,
}

impl PostgresInventoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl InventoryRepository for PostgresInventoryRepository {
    async fn list_items_for_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Vec<InventoryItem>, CoreError> {
        let models = inventory_items::Entity::find()
            .filter(inventory_items::Column::ProfileId.eq(profile_id))
            .order_by_asc(inventory_items::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list inventory items: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(InventoryItem::from).collect())
    }
}
