use super::handlers::{
    add_favorite::{__path_add_favorite, add_favorite},
    delete_recipe::{__path_delete_recipe, delete_recipe},
    generate_recipe::{__path_generate_recipe, generate_recipe},
    get_favorites::{__path_get_favorites, get_favorites},
    get_recipe::{__path_get_recipe, get_recipe},
    get_recipes_by_profile::{__path_get_recipes_by_profile, get_recipes_by_profile},
    is_favorited::{__path_is_favorited, is_favorited},
    remove_favorite::{__path_remove_favorite, remove_favorite},
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    generate_recipe,
    get_recipes_by_profile,
    get_recipe,
    delete_recipe,
    add_favorite,
    get_favorites,
    is_favorited,
    remove_favorite
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/generate", root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/recipes/profile/{{profile_id}}", root_path),
            get(get_recipes_by_profile),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", root_path),
            get(get_recipe).delete(delete_recipe),
        )
        .route(
            &format!("{}/recipes/favorites", root_path),
            post(add_favorite),
        )
        .route(
            &format!("{}/recipes/favorites/profile/{{profile_id}}", root_path),
            get(get_favorites),
        )
        .route(
            &format!("{}/recipes/favorites/{{profile_id}}/{{recipe_id}}", root_path),
            get(is_favorited).delete(remove_favorite),
        )
}
