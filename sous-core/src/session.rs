//! Application state for one user session.
//!
//! Holds what the front end shows: the ingredient list, the options, and the
//! outcome of the last generation (loading, recipes or an error message).

use crate::error::SessionError;
use crate::ingredients::IngredientList;
use crate::options::GenerationOptions;
use crate::prompts::{compile, Mode};
use crate::service::RecipeService;
use crate::types::Recipe;

#[derive(Debug, Default)]
pub struct Session {
    pub ingredients: IngredientList,
    pub options: GenerationOptions,
    loading: bool,
    recipes: Option<Vec<Recipe>>,
    error: Option<String>,
}

impl Session {
    pub fn new(ingredients: IngredientList, options: GenerationOptions) -> Self {
        Self {
            ingredients,
            options,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn recipes(&self) -> Option<&[Recipe]> {
        self.recipes.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Generate recipes from the current ingredients.
    ///
    /// An empty list fails validation before any request is made; the
    /// previous result stays in place in that case.
    pub async fn generate_from_ingredients(
        &mut self,
        service: &RecipeService,
    ) -> Result<&[Recipe], SessionError> {
        self.run(service, Mode::FromIngredients).await
    }

    /// Clear the ingredients and generate one random recipe.
    pub async fn surprise_me(&mut self, service: &RecipeService) -> Result<&[Recipe], SessionError> {
        if self.loading {
            return Err(SessionError::Busy);
        }
        self.ingredients.clear();
        self.run(service, Mode::Random).await
    }

    async fn run(&mut self, service: &RecipeService, mode: Mode) -> Result<&[Recipe], SessionError> {
        if self.loading {
            return Err(SessionError::Busy);
        }

        let prompt = match compile(mode, self.ingredients.as_slice(), &self.options) {
            Ok(prompt) => prompt,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        self.error = None;
        self.recipes = None;

        let result = {
            let _loading = LoadingGuard::set(&mut self.loading);
            service.generate(&prompt).await
        };

        match result {
            Ok(recipes) => {
                tracing::debug!(count = recipes.len(), "Recipes generated");
                Ok(self.recipes.insert(recipes).as_slice())
            }
            Err(e) => {
                self.error = Some(e.message().to_string());
                Err(e.into())
            }
        }
    }
}

/// Holds the loading flag for the duration of a request.
///
/// Clears it on drop, so a cancelled request leaves the session usable.
struct LoadingGuard<'a>(&'a mut bool);

impl<'a> LoadingGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
