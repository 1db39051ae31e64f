//! Recipe service: one prompt in, typed recipes out.

use crate::error::GenerationError;
use crate::llm::LlmProvider;
use crate::prompts::CompiledPrompt;
use crate::types::Recipe;

/// Issues compiled prompts to a provider and parses the recipes it returns.
///
/// Every call is a fresh request. Failures of any kind collapse into a single
/// [`GenerationError`]; nothing is retried here.
#[derive(Debug)]
pub struct RecipeService {
    provider: Box<dyn LlmProvider>,
}

impl RecipeService {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    pub async fn generate(&self, prompt: &CompiledPrompt) -> Result<Vec<Recipe>, GenerationError> {
        tracing::debug!(
            provider = self.provider.provider_name(),
            model = self.provider.model_name(),
            mode = ?prompt.mode,
            "Requesting recipes"
        );

        let raw = self
            .provider
            .generate_structured(&prompt.text, &prompt.schema)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Recipe generation request failed");
                GenerationError::default()
            })?;

        let recipes = parse_recipes(&raw).map_err(|reason| {
            tracing::error!(reason = %reason, "Recipe response did not match the schema");
            GenerationError::default()
        })?;

        if recipes.len() != prompt.recipe_count {
            tracing::warn!(
                expected = prompt.recipe_count,
                received = recipes.len(),
                "Model returned an unexpected number of recipes"
            );
        }

        Ok(recipes)
    }
}

/// Parse and validate a structured response body.
///
/// Returns the reason on failure so the caller can log it.
pub fn parse_recipes(raw: &str) -> Result<Vec<Recipe>, String> {
    let recipes: Vec<Recipe> =
        serde_json::from_str(raw.trim()).map_err(|e| format!("invalid JSON: {}", e))?;

    for (index, recipe) in recipes.iter().enumerate() {
        if !recipe.rating.is_finite() || !(1.0..=5.0).contains(&recipe.rating) {
            return Err(format!(
                "recipe {} has rating {} outside 1-5",
                index, recipe.rating
            ));
        }
    }

    Ok(recipes)
}
