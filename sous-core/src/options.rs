//! Soft constraints applied to generation.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "English";

/// Optional generation constraints. `None` means "any".
///
/// Values are free-form: front ends offer the choices in [`OptionField::choices`],
/// but nothing here rejects other strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    pub dietary_preferences: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub cooking_time: Option<String>,
    pub language: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            dietary_preferences: None,
            cuisine: None,
            difficulty: None,
            cooking_time: None,
            language: Some(DEFAULT_LANGUAGE.to_string()),
        }
    }
}

impl GenerationOptions {
    /// Set a field from user input. Blank input and "Any" unset it.
    pub fn set(&mut self, field: OptionField, value: &str) {
        *self.slot_mut(field) = field.normalize(value);
    }

    pub fn get(&self, field: OptionField) -> Option<&str> {
        match field {
            OptionField::Dietary => self.dietary_preferences.as_deref(),
            OptionField::Cuisine => self.cuisine.as_deref(),
            OptionField::Difficulty => self.difficulty.as_deref(),
            OptionField::CookingTime => self.cooking_time.as_deref(),
            OptionField::Language => self.language.as_deref(),
        }
    }

    /// Language if set to something other than the default.
    pub fn output_language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.eq_ignore_ascii_case(DEFAULT_LANGUAGE))
    }

    fn slot_mut(&mut self, field: OptionField) -> &mut Option<String> {
        match field {
            OptionField::Dietary => &mut self.dietary_preferences,
            OptionField::Cuisine => &mut self.cuisine,
            OptionField::Difficulty => &mut self.difficulty,
            OptionField::CookingTime => &mut self.cooking_time,
            OptionField::Language => &mut self.language,
        }
    }
}

/// The option fields, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    Dietary,
    Cuisine,
    Difficulty,
    CookingTime,
    Language,
}

impl OptionField {
    pub const ALL: [OptionField; 5] = [
        OptionField::Dietary,
        OptionField::Cuisine,
        OptionField::Difficulty,
        OptionField::CookingTime,
        OptionField::Language,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OptionField::Dietary => "Dietary",
            OptionField::Cuisine => "Cuisine",
            OptionField::Difficulty => "Difficulty",
            OptionField::CookingTime => "Cooking Time",
            OptionField::Language => "Language",
        }
    }

    /// Choices a front end should offer.
    pub fn choices(self) -> &'static [&'static str] {
        match self {
            OptionField::Dietary => &["Any", "Vegetarian", "Vegan", "Gluten-Free", "Keto"],
            OptionField::Cuisine => &["Any", "Italian", "Mexican", "Indian", "Chinese", "American"],
            OptionField::Difficulty => &["Any", "Easy", "Medium", "Hard"],
            OptionField::CookingTime => &["Any", "Under 30 mins", "30-60 mins", "Over 60 mins"],
            OptionField::Language => &[
                "English", "Hinglish", "Hindi", "Spanish", "French", "German", "Mandarin",
                "Japanese", "Bengali", "Tamil", "Telugu", "Marathi", "Gujarati", "Kannada",
                "Malayalam",
            ],
        }
    }

    /// Map user input to a stored value.
    ///
    /// Constraint values are lowercased so they read naturally inside a
    /// sentence ("It must be vegan."); language names keep their casing.
    pub fn normalize(self, value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("any") {
            return None;
        }
        match self {
            OptionField::Language => Some(value.to_string()),
            _ => Some(value.to_lowercase()),
        }
    }
}
