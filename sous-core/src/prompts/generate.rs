//! Compiles ingredients and options into a recipe-generation prompt.

use serde_json::Value;

use super::schema::recipe_schema;
use crate::error::ValidationError;
use crate::options::GenerationOptions;
use crate::types::Ingredient;

/// Number of recipes requested from ingredients.
pub const FROM_INGREDIENTS_COUNT: usize = 3;

/// Number of recipes requested in random mode.
pub const RANDOM_COUNT: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Several recipes built around the user's ingredients.
    FromIngredients,
    /// One recipe with no ingredient constraint.
    Random,
}

/// A prompt ready to send, with the schema the response must follow.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPrompt {
    pub mode: Mode,
    pub text: String,
    pub schema: Value,
    pub recipe_count: usize,
}

pub fn compile(
    mode: Mode,
    ingredients: &[Ingredient],
    options: &GenerationOptions,
) -> Result<CompiledPrompt, ValidationError> {
    let constraints = render_constraints(options);

    let (text, recipe_count) = match mode {
        Mode::FromIngredients => {
            if ingredients.is_empty() {
                return Err(ValidationError::NoIngredients);
            }
            let listed = ingredients
                .iter()
                .map(Ingredient::describe)
                .collect::<Vec<_>>()
                .join(", ");
            let text = format!(
                "You are an expert chef. Create {FROM_INGREDIENTS_COUNT} diverse and delicious recipes based on the following ingredients: {listed}.{constraints}\n\
                 You can suggest a few common pantry items (like oil, salt, pepper, flour) if needed, but the main focus should be the provided ingredients. \
                 For each recipe, provide a short, enticing description and a rating from 1 to 5."
            );
            (text, FROM_INGREDIENTS_COUNT)
        }
        Mode::Random => {
            let text = format!(
                "You are an expert chef. Create {RANDOM_COUNT} unique and delicious recipe.{constraints}\n\
                 Provide a short, enticing description and a rating from 1 to 5 for the recipe."
            );
            (text, RANDOM_COUNT)
        }
    };

    Ok(CompiledPrompt {
        mode,
        text,
        schema: recipe_schema(),
        recipe_count,
    })
}

/// The constraint clause, or an empty string when no option is set.
///
/// Sentences always appear in the order dietary, cuisine, difficulty,
/// cooking time, language.
pub fn render_constraints(options: &GenerationOptions) -> String {
    let set = |v: &Option<String>| -> Option<String> {
        v.as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let mut sentences = Vec::new();
    if let Some(diet) = set(&options.dietary_preferences) {
        sentences.push(format!("It must be {diet}."));
    }
    if let Some(cuisine) = set(&options.cuisine) {
        sentences.push(format!("The cuisine should be {cuisine}."));
    }
    if let Some(difficulty) = set(&options.difficulty) {
        sentences.push(format!("The difficulty level should be {difficulty}."));
    }
    if let Some(time) = set(&options.cooking_time) {
        sentences.push(format!("The total cooking time should be {time}."));
    }
    if let Some(language) = options.output_language() {
        sentences.push(format!(
            "The entire recipe, including names, descriptions, and all text, must be written in {language}."
        ));
    }

    if sentences.is_empty() {
        String::new()
    } else {
        format!(
            "\nPlease adhere to the following constraints: {}",
            sentences.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eggs() -> Vec<Ingredient> {
        vec![Ingredient::new("egg", "2")]
    }

    fn no_options() -> GenerationOptions {
        GenerationOptions::default()
    }

    #[test]
    fn test_from_ingredients_requires_ingredients() {
        let result = compile(Mode::FromIngredients, &[], &no_options());
        assert_eq!(result, Err(ValidationError::NoIngredients));
    }

    #[test]
    fn test_egg_scenario() {
        let prompt = compile(Mode::FromIngredients, &eggs(), &no_options()).unwrap();

        assert_eq!(prompt.recipe_count, 3);
        assert!(prompt.text.contains("Create 3 diverse and delicious recipes"));
        assert!(prompt.text.contains("following ingredients: 2 egg."));
        assert!(prompt.text.contains("common pantry items"));
        assert!(!prompt.text.contains("constraints"));
    }

    #[test]
    fn test_ingredients_are_joined_in_order() {
        let ingredients = vec![
            Ingredient::new("chicken breast", "2"),
            Ingredient::new("rice", "1 cup"),
            Ingredient::new("salt", ""),
        ];
        let prompt = compile(Mode::FromIngredients, &ingredients, &no_options()).unwrap();
        assert!(prompt
            .text
            .contains("ingredients: 2 chicken breast, 1 cup rice, salt."));
    }

    #[test]
    fn test_random_requests_one_recipe_regardless_of_ingredients() {
        for ingredients in [vec![], eggs()] {
            let prompt = compile(Mode::Random, &ingredients, &no_options()).unwrap();
            assert_eq!(prompt.recipe_count, 1);
            assert!(prompt.text.contains("Create 1 unique and delicious recipe."));
            assert!(!prompt.text.contains("egg"));
        }
    }

    #[test]
    fn test_constraint_order_is_stable() {
        let options = GenerationOptions {
            cuisine: Some("Italian".to_string()),
            language: Some("French".to_string()),
            ..Default::default()
        };
        let prompt = compile(Mode::FromIngredients, &eggs(), &options).unwrap();

        let cuisine = prompt.text.find("The cuisine should be Italian.").unwrap();
        let language = prompt.text.find("must be written in French.").unwrap();
        assert!(cuisine < language);
        assert!(!prompt.text.contains("It must be"));
        assert!(!prompt.text.contains("difficulty level"));
        assert!(!prompt.text.contains("cooking time"));
    }

    #[test]
    fn test_all_constraints() {
        let options = GenerationOptions {
            dietary_preferences: Some("vegan".to_string()),
            cuisine: Some("indian".to_string()),
            difficulty: Some("easy".to_string()),
            cooking_time: Some("under 30 mins".to_string()),
            language: Some("Hindi".to_string()),
        };

        assert_eq!(
            render_constraints(&options),
            "\nPlease adhere to the following constraints: It must be vegan. \
             The cuisine should be indian. The difficulty level should be easy. \
             The total cooking time should be under 30 mins. \
             The entire recipe, including names, descriptions, and all text, must be written in Hindi."
        );
    }

    #[test]
    fn test_english_adds_no_language_sentence() {
        let options = GenerationOptions {
            language: Some("ENGLISH".to_string()),
            ..Default::default()
        };
        assert_eq!(render_constraints(&options), "");
    }

    #[test]
    fn test_schema_is_attached() {
        let prompt = compile(Mode::Random, &[], &no_options()).unwrap();
        assert_eq!(prompt.schema, recipe_schema());
    }
}
