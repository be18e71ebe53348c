use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, inventory::ports::InventoryRepository};

/// Ingredient names a generation request works with.
///
/// An explicit list is returned as given (order and duplicates preserved).
/// Without one, the profile's pantry is read and only items with a positive
/// quantity are kept, in storage order. An empty outcome is an error, and an
/// explicit empty list never falls back to the pantry.
pub async fn resolve_ingredients<IR>(
    inventory_repository: &IR,
    profile_id: Uuid,
    explicit: Option<&[String]>,
) -> Result<Vec<String>, CoreError>
where
    IR: InventoryRepository,
{
    let ingredients = match explicit {
        Some(list) => list.to_vec(),
        None => inventory_repository
            .list_items_for_profile(profile_id)
            .await?
            .into_iter()
            .filter(|item| item.is_available())
            .map(|item| item.name)
            .collect(),
    };

    if ingredients.is_empty() {
        return Err(CoreError::InsufficientIngredients);
    }

    Ok(ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InMemoryInventoryRepository;

    #[tokio::test]
    async fn explicit_list_is_returned_unchanged() {
        let profile_id = Uuid::new_v4();
        let inventory = InMemoryInventoryRepository::with_items(profile_id, &[("rice", 1.0)]);
        let explicit = vec![
            "tomato".to_string(),
            "basil".to_string(),
            "tomato".to_string(),
        ];

        let resolved = resolve_ingredients(&inventory, profile_id, Some(explicit.as_slice()))
            .await
            .unwrap();

        assert_eq!(resolved, explicit);
        assert_eq!(inventory.calls(), 0);
    }

    #[tokio::test]
    async fn pantry_items_with_positive_quantity_are_used_in_order() {
        let profile_id = Uuid::new_v4();
        let inventory = InMemoryInventoryRepository::with_items(
            profile_id,
            &[("eggs", 6.0), ("milk", 0.0), ("flour", 0.5), ("sugar", -1.0)],
        );

        let resolved = resolve_ingredients(&inventory, profile_id, None)
            .await
            .unwrap();

        assert_eq!(resolved, vec!["eggs".to_string(), "flour".to_string()]);
    }

    #[tokio::test]
    async fn other_profiles_items_are_ignored() {
        let profile_id = Uuid::new_v4();
        let inventory = InMemoryInventoryRepository::with_items(Uuid::new_v4(), &[("eggs", 6.0)]);

        let result = resolve_ingredients(&inventory, profile_id, None).await;

        assert_eq!(result, Err(CoreError::InsufficientIngredients));
    }

    #[tokio::test]
    async fn depleted_pantry_is_insufficient() {
        let profile_id = Uuid::new_v4();
        let inventory =
            InMemoryInventoryRepository::with_items(profile_id, &[("milk", 0.0), ("salt", 0.0)]);

        let result = resolve_ingredients(&inventory, profile_id, None).await;

        assert_eq!(result, Err(CoreError::InsufficientIngredients));
    }

    #[tokio::test]
    async fn explicit_empty_list_does_not_read_the_pantry() {
        let profile_id = Uuid::new_v4();
        let inventory = InMemoryInventoryRepository::with_items(profile_id, &[("eggs", 6.0)]);

        let result = resolve_ingredients(&inventory, profile_id, Some(&[][..])).await;

        assert_eq!(result, Err(CoreError::InsufficientIngredients));
        assert_eq!(inventory.calls(), 0);
    }
}
