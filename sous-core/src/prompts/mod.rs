//! Prompt templates and the structured-output schema sent with them.

pub mod generate;
pub mod schema;

pub use generate::{compile, render_constraints, CompiledPrompt, Mode};
pub use schema::recipe_schema;
