use crate::application::http::recipe::validators::GenerateRecipeRequest;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use pantrychef_core::domain::recipe::entities::Recipe;
use pantrychef_core::domain::recipe::ports::RecipeService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate recipe",
    description = "Generates a recipe from the given ingredients, or from the profile's pantry when none are given, and stores it.",
    responses(
        (status = 201, body = GenerateRecipeResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = GenerateRecipeRequest
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeRequest>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(GenerateRecipeResponse { data: recipe }))
}
