use crate::application::http::recipe::validators::GetRecipesParams;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, Query, State};
use pantrychef_core::domain::recipe::entities::ProfileRecipe;
use pantrychef_core::domain::recipe::ports::RecipeService;
use pantrychef_core::domain::recipe::value_objects::GetRecipesInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRecipesResponse {
    pub data: Vec<ProfileRecipe>,
}

#[utoipa::path(
    get,
    path = "/profile/{profile_id}",
    tag = "recipe",
    summary = "List recipes of a profile",
    description = "Most recent first, each flagged with whether the profile favorited it.",
    params(
        ("profile_id" = Uuid, Path, description = "Profile ID"),
        GetRecipesParams
    ),
    responses(
        (status = 200, body = GetRecipesResponse)
    ),
)]
pub async fn get_recipes_by_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<Uuid>,
    Query(params): Query<GetRecipesParams>,
) -> Result<Response<GetRecipesResponse>, ApiError> {
    params
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let recipes = state
        .service
        .get_recipes_by_profile(GetRecipesInput {
            profile_id,
            limit: params.limit,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipesResponse { data: recipes }))
}
