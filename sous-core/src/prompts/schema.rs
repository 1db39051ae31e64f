//! Structured-output schema for recipe responses.
//!
//! Uses the OpenAPI subset Gemini accepts as `responseSchema`
//! (upper-case type names, `required` lists per object).

use serde_json::{json, Value};

/// Fields every recipe object must carry. `notes` is optional.
pub const REQUIRED_RECIPE_FIELDS: [&str; 5] = [
    "recipeName",
    "description",
    "rating",
    "ingredients",
    "instructions",
];

pub fn recipe_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "recipeName": {
                    "type": "STRING",
                    "description": "The name of the recipe."
                },
                "description": {
                    "type": "STRING",
                    "description": "A short, enticing description of the dish."
                },
                "rating": {
                    "type": "NUMBER",
                    "description": "A rating for the recipe from 1 to 5, where 5 is best, based on general appeal and ease of preparation."
                },
                "ingredients": {
                    "type": "ARRAY",
                    "description": "The list of ingredients for the recipe. Include both provided and any additional ingredients needed.",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "item": {
                                "type": "STRING",
                                "description": "The name of the ingredient."
                            },
                            "quantity": {
                                "type": "STRING",
                                "description": "The amount of the ingredient, e.g., '1 cup', '2 tbsp'."
                            }
                        },
                        "required": ["item", "quantity"]
                    }
                },
                "instructions": {
                    "type": "ARRAY",
                    "description": "Step-by-step instructions to prepare the dish.",
                    "items": { "type": "STRING" }
                },
                "notes": {
                    "type": "STRING",
                    "description": "Optional notes or tips for the recipe, like variations or serving suggestions."
                }
            },
            "required": REQUIRED_RECIPE_FIELDS
        }
    })
}
