use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("No ingredients available to generate recipe")]
    InsufficientIngredients,

    #[error("Recipe generation unavailable: {0}")]
    GenerationUnavailable(String),

    /// The model answered with a well-formed object that lacks usable required fields.
    #[error("Invalid recipe payload, missing required field(s): {}", .fields.join(", "))]
    InvalidRecipePayload { fields: Vec<String> },

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    #[error("Not found")]
    NotFound,

    #[error("Invalid request: {0}")]
    Invalid(String),

    #[error("Internal server error")]
    InternalServerError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_payload_message_names_every_field() {
        let err = CoreError::InvalidRecipePayload {
            fields: vec!["title".to_string(), "instructions".to_string()],
        };

        assert_eq!(
            err.to_string(),
            "Invalid recipe payload, missing required field(s): title, instructions"
        );
    }
}
