pub mod add_favorite;
pub mod delete_recipe;
pub mod generate_recipe;
pub mod get_favorites;
pub mod get_recipe;
pub mod get_recipes_by_profile;
pub mod is_favorited;
pub mod remove_favorite;
