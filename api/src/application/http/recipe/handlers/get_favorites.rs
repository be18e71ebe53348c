use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantrychef_core::domain::recipe::entities::FavoriteRecipe;
use pantrychef_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetFavoritesResponse {
    pub data: Vec<FavoriteRecipe>,
}

#[utoipa::path(
    get,
    path = "/favorites/profile/{profile_id}",
    tag = "recipe",
    summary = "List favorite recipes of a profile",
    params(
        ("profile_id" = Uuid, Path, description = "Profile ID"),
    ),
    responses(
        (status = 200, body = GetFavoritesResponse)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
) -> Result<Response<GetFavoritesResponse>, ApiError> {
    let favorites = state
        .service
        .get_favorites(profile_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetFavoritesResponse { data: favorites }))
}
