//! The user's on-hand ingredients.

use crate::error::ValidationError;
use crate::types::Ingredient;

/// Ordered ingredient list, unique by item name (case-insensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<Ingredient>,
}

impl IngredientList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient. Both fields are trimmed.
    ///
    /// Returns `Ok(true)` if it was added, `Ok(false)` if an ingredient with the
    /// same name (ignoring case) is already present; the list is unchanged then.
    pub fn add(&mut self, item: &str, quantity: &str) -> Result<bool, ValidationError> {
        let item = item.trim();
        if item.is_empty() {
            return Err(ValidationError::EmptyIngredientName);
        }
        if self.contains(item) {
            tracing::debug!(item = item, "Ignoring duplicate ingredient");
            return Ok(false);
        }
        self.items.push(Ingredient::new(item, quantity.trim()));
        Ok(true)
    }

    /// Remove the ingredient with this name (ignoring case). Returns whether one was removed.
    pub fn remove(&mut self, item: &str) -> bool {
        let key = item.trim().to_lowercase();
        let before = self.items.len();
        self.items.retain(|i| i.item.to_lowercase() != key);
        self.items.len() != before
    }

    pub fn contains(&self, item: &str) -> bool {
        let key = item.trim().to_lowercase();
        self.items.iter().any(|i| i.item.to_lowercase() == key)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Ingredient] {
        &self.items
    }

    /// Each ingredient as "quantity item", in insertion order.
    pub fn descriptions(&self) -> Vec<String> {
        self.items.iter().map(Ingredient::describe).collect()
    }

    /// Parse a CLI-style entry: `"quantity:item"` or just `"item"`.
    pub fn add_spec(&mut self, spec: &str) -> Result<bool, ValidationError> {
        match spec.split_once(':') {
            Some((quantity, item)) => self.add(item, quantity),
            None => self.add(spec, ""),
        }
    }
}

impl<'a> IntoIterator for &'a IngredientList {
    type Item = &'a Ingredient;
    type IntoIter = std::slice::Iter<'a, Ingredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
