use crate::{domain::inventory::entities::InventoryItem, entity::inventory_items};

impl From<inventory_items::Model> for InventoryItem {
    fn from(model: inventory_items::Model) -> Self {
        Self {
            id: model.id,
            profile_id: model.profile_id,
            name: model.name,
            quantity: model.quantity,
            unit: model.unit,
            category: model.category,
            expiry_date: model.expiry_date,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
