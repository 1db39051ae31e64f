use thiserror::Error;

/// User-facing message for every failed generation request.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate recipes. The AI model might be busy or there was an issue with the request. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please add at least one ingredient before generating recipes.")]
    NoIngredients,

    #[error("Ingredient name must not be empty.")]
    EmptyIngredientName,
}

/// Opaque failure of the recipe service.
///
/// The cause (transport, API status, malformed payload) is logged where it
/// happens; only the message reaches the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct GenerationError {
    message: String,
}

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for GenerationError {
    fn default() -> Self {
        Self::new(GENERATION_FAILED_MESSAGE)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("A generation request is already in progress")]
    Busy,
}
