use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantrychef_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::NotFound(_) => "E_NOT_FOUND",
            ApiError::BadGateway(_) => "E_GENERATION_UNAVAILABLE",
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InsufficientIngredients
            | CoreError::InvalidRecipePayload { .. }
            | CoreError::Invalid(_) => ApiError::BadRequest(error.to_string()),
            CoreError::NotFound => ApiError::NotFound("Resource not found".to_string()),
            CoreError::GenerationUnavailable(ref reason) => {
                error!("Recipe generation unavailable: {}", reason);
                ApiError::BadGateway("Recipe generation is currently unavailable".to_string())
            }
            CoreError::PersistenceFailure(ref reason) => {
                error!("Persistence failure: {}", reason);
                ApiError::InternalServerError("Failed to store data".to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler sees the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, routing::post};
    use axum_test::TestServer;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(range(min = 1, message = "servings must be at least 1"))]
        servings: u32,
    }

    async fn echo(ValidateJson(payload): ValidateJson<Payload>) -> String {
        payload.servings.to_string()
    }

    #[test]
    fn test_core_errors_map_to_http_status() {
        let cases = [
            (CoreError::InsufficientIngredients, StatusCode::BAD_REQUEST),
            (
                CoreError::InvalidRecipePayload {
                    fields: vec!["title".to_string()],
                },
                StatusCode::BAD_REQUEST,
            ),
            (CoreError::Invalid("bad".to_string()), StatusCode::BAD_REQUEST),
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (
                CoreError::GenerationUnavailable("timeout".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoreError::PersistenceFailure("disk full".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (core_error, status) in cases {
            assert_eq!(ApiError::from(core_error).status(), status);
        }
    }

    #[test]
    fn test_persistence_details_are_not_exposed() {
        let api_error = ApiError::from(CoreError::PersistenceFailure("disk full".to_string()));

        assert!(!api_error.to_string().contains("disk full"));
    }

    #[test]
    fn test_generation_details_are_not_exposed() {
        let api_error = ApiError::from(CoreError::GenerationUnavailable(
            "error sending request for url (https://example.test/?key=SUPERSECRETKEY)".to_string(),
        ));

        assert_eq!(api_error.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            api_error.to_string(),
            "Recipe generation is currently unavailable"
        );
        assert!(!api_error.to_string().contains("SUPERSECRETKEY"));
    }

    #[tokio::test]
    async fn test_error_body_carries_code_message_and_status() {
        let app = Router::new().route(
            "/",
            post(|| async { ApiError::from(CoreError::InsufficientIngredients) }),
        );
        let server = TestServer::new(app).unwrap();

        let response = server.post("/").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<ApiErrorResponse>();
        assert_eq!(body.code, "E_BAD_REQUEST");
        assert_eq!(body.status, 400);
        assert_eq!(body.message, "No ingredients available to generate recipe");
    }

    #[tokio::test]
    async fn test_validate_json_rejects_rule_violations() {
        let app = Router::new().route("/", post(echo));
        let server = TestServer::new(app).unwrap();

        let ok = server.post("/").json(&json!({ "servings": 3 })).await;
        ok.assert_status_ok();
        ok.assert_text("3");

        let invalid = server.post("/").json(&json!({ "servings": 0 })).await;
        invalid.assert_status(StatusCode::BAD_REQUEST);
        assert!(
            invalid
                .json::<ApiErrorResponse>()
                .message
                .contains("servings must be at least 1")
        );

        let malformed = server.post("/").json(&json!({ "servings": "many" })).await;
        malformed.assert_status(StatusCode::BAD_REQUEST);
    }
}
