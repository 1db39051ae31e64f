//! Recipe display and plain-text export.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::Recipe;

const TOTAL_STARS: usize = 5;

/// Plain-text export, shared by clipboard copy and file export.
///
/// Field order: name, rating, description, ingredients, numbered
/// instructions, then notes only when present.
pub fn format_recipe(recipe: &Recipe) -> String {
    let mut out = format!(
        "Recipe: {}\n\nRating: {} / 5\n\nDescription: {}\n\n",
        recipe.recipe_name, recipe.rating, recipe.description
    );
    out.push_str("Ingredients:\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("- {} {}\n", ingredient.quantity, ingredient.item));
    }
    out.push_str("\nInstructions:\n");
    for (index, step) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, step));
    }
    // Whitespace-only notes are printed; only an empty string is skipped.
    if let Some(notes) = recipe.notes() {
        out.push_str(&format!("\nChef's Notes:\n{}\n", notes));
    }
    out
}

/// `<name>.txt` with spaces turned into underscores.
///
/// Path separators are replaced too so the name stays a single file.
pub fn export_file_name(recipe: &Recipe) -> String {
    let stem: String = recipe
        .recipe_name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{}.txt", stem)
}

/// Write the export text into `dir` and return the file path.
pub fn export_to_dir(recipe: &Recipe, dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(recipe));
    fs::write(&path, format_recipe(recipe))?;
    tracing::debug!(path = %path.display(), "Exported recipe");
    Ok(path)
}

/// Export a batch of recipes into `dir`, one file each.
///
/// Recipes whose file name was already used in this batch get a numeric
/// suffix (`Name_2.txt`) instead of overwriting the earlier file.
pub fn export_all_to_dir(recipes: &[Recipe], dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut used = HashSet::new();
    let mut paths = Vec::with_capacity(recipes.len());

    for recipe in recipes {
        let file_name = export_file_name(recipe);
        let mut candidate = file_name.clone();
        let mut n = 2;
        while !used.insert(candidate.clone()) {
            candidate = match file_name.strip_suffix(".txt") {
                Some(stem) => format!("{}_{}.txt", stem, n),
                None => format!("{}_{}", file_name, n),
            };
            n += 1;
        }
        if candidate != file_name {
            tracing::warn!(
                recipe = %recipe.recipe_name,
                file = %candidate,
                "Duplicate recipe name in batch, exporting under a suffixed name"
            );
        }

        let path = dir.join(&candidate);
        fs::write(&path, format_recipe(recipe))?;
        tracing::debug!(path = %path.display(), "Exported recipe");
        paths.push(path);
    }

    Ok(paths)
}

/// Five stars, `round(rating)` of them filled.
pub fn star_bar(rating: f64) -> String {
    let filled = if rating.is_finite() {
        rating.round().clamp(0.0, TOTAL_STARS as f64) as usize
    } else {
        0
    };
    let mut bar = "★".repeat(filled);
    bar.push_str(&"☆".repeat(TOTAL_STARS - filled));
    bar
}

/// Terminal display view of a recipe.
pub fn render_card(recipe: &Recipe) -> String {
    let mut out = format!(
        "{}  {} ({}/5)\n{}\n",
        recipe.recipe_name,
        star_bar(recipe.rating),
        recipe.rating,
        recipe.description
    );

    out.push_str("\nIngredients\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  • {}\n", ingredient.describe()));
    }

    out.push_str("\nInstructions\n");
    for (index, step) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, step));
    }

    if let Some(notes) = recipe.notes() {
        out.push_str(&format!("\nChef's Notes\n  {}\n", notes));
    }
    out
}
