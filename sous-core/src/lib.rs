pub mod config;
pub mod error;
pub mod ingredients;
pub mod llm;
pub mod options;
pub mod prompts;
pub mod render;
pub mod service;
pub mod session;
pub mod theme;
pub mod types;

pub use config::{ConfigError, SousConfig};
pub use error::{GenerationError, SessionError, ValidationError};
pub use ingredients::IngredientList;
pub use llm::{create_provider, FakeProvider, GeminiProvider, LlmError, LlmProvider};
pub use options::{GenerationOptions, OptionField};
pub use prompts::{compile, recipe_schema, CompiledPrompt, Mode};
pub use render::{
    export_all_to_dir, export_file_name, export_to_dir, format_recipe, render_card, star_bar,
};
pub use service::RecipeService;
pub use session::Session;
pub use theme::{Theme, ThemeError, ThemeStore};
pub use types::{Ingredient, Recipe};
