//! Fake provider for tests and offline runs.
//!
//! Responses are matched by prompt substring, so tests run without network
//! access or API keys.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
enum FakeReply {
    Text(String),
    Fail(String),
}

/// A fake provider that answers from registered (substring, response) pairs.
///
/// The first registered pattern contained in the prompt (case-insensitive) wins.
#[derive(Debug, Default)]
pub struct FakeProvider {
    replies: Vec<(String, FakeReply)>,
    default_response: Option<String>,
    calls: AtomicUsize,
}

const SAMPLE_TRIO: &str = r#"[
  {
    "recipeName": "Garlic Chicken Rice Bowl",
    "description": "Juicy pan-seared chicken over fluffy rice with crisp broccoli.",
    "ingredients": [
      {"item": "chicken breast", "quantity": "2"},
      {"item": "rice", "quantity": "1 cup"},
      {"item": "broccoli", "quantity": "1 head"},
      {"item": "garlic cloves", "quantity": "3"}
    ],
    "instructions": [
      "Cook the rice according to the package directions.",
      "Season and sear the chicken until golden, then slice.",
      "Steam the broccoli and toss with garlic.",
      "Serve the chicken and broccoli over the rice."
    ],
    "rating": 4.5,
    "notes": "A drizzle of soy sauce makes this even better."
  },
  {
    "recipeName": "Chicken Fried Rice",
    "description": "A quick weeknight fried rice using leftover rice.",
    "ingredients": [
      {"item": "chicken breast", "quantity": "1"},
      {"item": "cooked rice", "quantity": "2 cups"},
      {"item": "broccoli florets", "quantity": "1 cup"},
      {"item": "oil", "quantity": "1 tbsp"}
    ],
    "instructions": [
      "Dice the chicken and stir-fry in hot oil.",
      "Add broccoli and cook for two minutes.",
      "Add rice and fry until slightly crisp."
    ],
    "rating": 4
  },
  {
    "recipeName": "Creamy Broccoli Chicken Bake",
    "description": "A comforting casserole with a golden top.",
    "ingredients": [
      {"item": "chicken breast", "quantity": "2"},
      {"item": "rice", "quantity": "1 cup"},
      {"item": "broccoli", "quantity": "1 head"},
      {"item": "flour", "quantity": "2 tbsp"}
    ],
    "instructions": [
      "Preheat the oven to 190C.",
      "Layer rice, broccoli and chicken in a dish.",
      "Cover with a simple white sauce and bake for 35 minutes."
    ],
    "rating": 3.5
  }
]"#;

const SAMPLE_SINGLE: &str = r#"[
  {
    "recipeName": "Lemon Herb Pasta",
    "description": "Bright, zesty spaghetti ready in twenty minutes.",
    "ingredients": [
      {"item": "spaghetti", "quantity": "200 g"},
      {"item": "lemon", "quantity": "1"},
      {"item": "parsley", "quantity": "a handful"},
      {"item": "olive oil", "quantity": "3 tbsp"}
    ],
    "instructions": [
      "Boil the spaghetti in salted water.",
      "Whisk lemon zest, juice and olive oil.",
      "Toss the pasta with the dressing and parsley."
    ],
    "rating": 4
  }
]"#;

impl FakeProvider {
    /// A provider with no registered responses; every call fails.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.replies.push((
            prompt_contains.to_lowercase(),
            FakeReply::Text(response.to_string()),
        ));
    }

    /// Make prompts containing `prompt_contains` fail with a request error.
    pub fn add_failure(&mut self, prompt_contains: &str, reason: &str) {
        self.replies.push((
            prompt_contains.to_lowercase(),
            FakeReply::Fail(reason.to_string()),
        ));
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Canned recipes: three for ingredient prompts, one for random prompts.
    pub fn with_sample_recipes() -> Self {
        let mut provider = Self::new();
        provider.add_response("Create 3 diverse", SAMPLE_TRIO);
        provider.add_response("Create 1 unique", SAMPLE_SINGLE);
        provider
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn generate_structured(&self, prompt: &str, _schema: &Value) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let prompt_lower = prompt.to_lowercase();
        for (pattern, reply) in &self.replies {
            if prompt_lower.contains(pattern.as_str()) {
                return match reply {
                    FakeReply::Text(text) => Ok(text.clone()),
                    FakeReply::Fail(reason) => Err(LlmError::RequestFailed(reason.clone())),
                };
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_fake_provider_matching() {
        let provider = FakeProvider::with_response("hello", "world");
        let result = provider
            .generate_structured("Say hello to the user", &json!({}))
            .await
            .unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_case_insensitive() {
        let provider = FakeProvider::with_response("HELLO", "world");
        let result = provider
            .generate_structured("hello there", &json!({}))
            .await
            .unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_no_match() {
        let provider = FakeProvider::new();
        let result = provider.generate_structured("random prompt", &json!({})).await;
        assert!(result.is_err());
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_fake_provider_failure() {
        let mut provider = FakeProvider::new().with_default_response("[]");
        provider.add_failure("boom", "connection reset");
        let result = provider.generate_structured("boom goes the prompt", &json!({})).await;
        assert!(matches!(result, Err(LlmError::RequestFailed(msg)) if msg == "connection reset"));
    }

    #[tokio::test]
    async fn test_sample_recipes_parse() {
        let provider = FakeProvider::with_sample_recipes();

        let trio = provider
            .generate_structured("You are an expert chef. Create 3 diverse and delicious recipes", &json!({}))
            .await
            .unwrap();
        let trio: Vec<crate::types::Recipe> = serde_json::from_str(&trio).unwrap();
        assert_eq!(trio.len(), 3);

        let single = provider
            .generate_structured("You are an expert chef. Create 1 unique and delicious recipe.", &json!({}))
            .await
            .unwrap();
        let single: Vec<crate::types::Recipe> = serde_json::from_str(&single).unwrap();
        assert_eq!(single.len(), 1);
    }
}
