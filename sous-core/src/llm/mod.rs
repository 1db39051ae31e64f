//! Generative-language provider abstraction.
//!
//! The recipe service talks to a [`LlmProvider`]; Gemini is the real
//! backend and [`FakeProvider`] serves tests and offline runs.

mod fake;
mod gemini;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::config::{ProviderKind, SousConfig};

/// Error type for provider calls. Never shown to users as-is.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// A model that can answer a prompt with JSON matching a schema.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send `prompt` and ask for a JSON response conforming to `schema`.
    /// Returns the raw response text.
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String, LlmError>;

    /// Provider name, e.g. "gemini" or "fake".
    fn provider_name(&self) -> &'static str;

    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: LlmProvider + ?Sized> LlmProvider for Arc<T> {
    async fn generate_structured(&self, prompt: &str, schema: &Value) -> Result<String, LlmError> {
        (**self).generate_structured(prompt, schema).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Build the provider selected by `config`.
pub fn create_provider(config: &SousConfig) -> Result<Box<dyn LlmProvider>, LlmError> {
    match config.provider {
        ProviderKind::Fake => Ok(Box::new(FakeProvider::with_sample_recipes())),
        ProviderKind::Gemini => {
            let api_key = config
                .api_key
                .clone()
                .ok_or_else(|| LlmError::NotConfigured("GEMINI_API_KEY not set".to_string()))?;
            Ok(Box::new(GeminiProvider::new(
                api_key,
                config.model.clone(),
                config.base_url.clone(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(provider: ProviderKind, api_key: Option<&str>) -> SousConfig {
        SousConfig {
            provider,
            api_key: api_key.map(str::to_string),
            model: "gemini-2.5-flash".to_string(),
            base_url: "http://localhost:1".to_string(),
            data_dir: PathBuf::from("data/sous"),
        }
    }

    #[test]
    fn test_gemini_requires_api_key() {
        let result = create_provider(&config(ProviderKind::Gemini, None));
        assert!(matches!(result, Err(LlmError::NotConfigured(_))));
    }

    #[test]
    fn test_create_providers() {
        let gemini = create_provider(&config(ProviderKind::Gemini, Some("key"))).unwrap();
        assert_eq!(gemini.provider_name(), "gemini");
        assert_eq!(gemini.model_name(), "gemini-2.5-flash");

        let fake = create_provider(&config(ProviderKind::Fake, None)).unwrap();
        assert_eq!(fake.provider_name(), "fake");
    }
}
