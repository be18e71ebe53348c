pub mod inventory_items;
pub mod profiles;
pub mod recipe_favorites;
pub mod recipes;
