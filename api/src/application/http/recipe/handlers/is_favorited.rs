use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantrychef_core::domain::recipe::ports::RecipeService;
use pantrychef_core::domain::recipe::value_objects::FavoriteKey;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct IsFavoritedResponse {
    pub is_favorited: bool,
}

#[utoipa::path(
    get,
    path = "/favorites/{profile_id}/{recipe_id}",
    tag = "recipe",
    summary = "Check favorite",
    params(
        ("profile_id" = Uuid, Path, description = "Profile ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = IsFavoritedResponse)
    ),
)]
pub async fn is_favorited(
    State(state): State<AppState>,
    Path((profile_id, recipe_id)): Path<(Uuid, Uuid)>,
) -> Result<Response<IsFavoritedResponse>, ApiError> {
    let is_favorited = state
        .service
        .is_favorited(FavoriteKey {
            profile_id,
            recipe_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(IsFavoritedResponse { is_favorited }))
}
