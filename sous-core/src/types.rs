//! Recipe data contract shared with the generative API.

use serde::{Deserialize, Serialize};

/// A pantry item with an optional free-form quantity ("1 cup", "2", "").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    pub quantity: String,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity: quantity.into(),
        }
    }

    /// "quantity item", trimmed so an empty quantity leaves no leading space.
    pub fn describe(&self) -> String {
        format!("{} {}", self.quantity, self.item).trim().to_string()
    }
}

/// A generated recipe as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub recipe_name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    /// 1 to 5, 5 is best.
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Recipe {
    /// Notes, if present and non-empty. Whitespace-only notes still count.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }
}
