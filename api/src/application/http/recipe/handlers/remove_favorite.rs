use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use pantrychef_core::domain::recipe::ports::RecipeService;
use pantrychef_core::domain::recipe::value_objects::FavoriteKey;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RemoveFavoriteResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/favorites/{profile_id}/{recipe_id}",
    tag = "recipe",
    summary = "Remove favorite",
    params(
        ("profile_id" = Uuid, Path, description = "Profile ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = RemoveFavoriteResponse),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((profile_id, recipe_id)): Path<(Uuid, Uuid)>,
) -> Result<Response<RemoveFavoriteResponse>, ApiError> {
    state
        .service
        .remove_favorite(FavoriteKey {
            profile_id,
            recipe_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RemoveFavoriteResponse {
        message: "Favorite removed successfully".to_string(),
    }))
}
