use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A pantry item owned by a profile. Only read by the recipe pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub name: String,
    pub quantity: f64,
    pub unit: String, // 'gram' | 'kilogram' | 'liter' | 'milliliter' | 'piece' | ...
    pub category: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn is_available(&self) -> bool {
        self.quantity > 0.0
    }
}
