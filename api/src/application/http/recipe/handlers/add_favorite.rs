use crate::application::http::recipe::validators::AddFavoriteRequest;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantrychef_core::domain::recipe::entities::RecipeFavorite;
use pantrychef_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AddFavoriteResponse {
    pub data: RecipeFavorite,
}

#[utoipa::path(
    post,
    path = "/favorites",
    tag = "recipe",
    summary = "Favorite a recipe",
    description = "Idempotent: favoriting the same recipe twice returns the existing favorite.",
    responses(
        (status = 201, body = AddFavoriteResponse),
        (status = 404, body = ApiErrorResponse)
    ),
    request_body = AddFavoriteRequest
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AddFavoriteRequest>,
) -> Result<Response<AddFavoriteResponse>, ApiError> {
    let favorite = state
        .service
        .add_favorite(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddFavoriteResponse { data: favorite }))
}
