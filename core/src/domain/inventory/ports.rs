use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, inventory::entities::InventoryItem};

/// Read access to a profile's pantry
#[cfg_attr(test, mockall::automock)]
pub trait InventoryRepository: Send + Sync {
    /// Every item of the profile, in storage order, depleted ones included.
    fn list_items_for_profile(
        &self,
        profile_id: Uuid,
    ) -> impl Future<Output = Result<Vec<InventoryItem>, CoreError>> + Send;
}
