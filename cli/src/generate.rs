use anyhow::{Context, Result};
use sous_core::{
    compile, create_provider, export_all_to_dir, render_card, GenerationOptions, IngredientList,
    LlmProvider, Mode, Recipe, RecipeService, Session, SousConfig, Theme, ThemeStore,
};

use crate::theme::Palette;
use crate::OutputArgs;

/// Build an ingredient list from "quantity:item" arguments, dropping duplicates.
pub fn build_ingredients(specs: &[String]) -> Result<IngredientList> {
    let mut list = IngredientList::new();
    for spec in specs {
        let added = list
            .add_spec(spec)
            .with_context(|| format!("Invalid ingredient: {:?}", spec))?;
        if !added {
            eprintln!("Skipping duplicate ingredient: {}", spec);
        }
    }
    Ok(list)
}

fn service_from_env() -> Result<(RecipeService, SousConfig)> {
    let config = SousConfig::from_env()?;
    let provider = create_provider(&config)?;
    tracing::debug!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        "Using recipe provider"
    );
    Ok((RecipeService::new(provider), config))
}

pub async fn from_ingredients(
    specs: &[String],
    options: GenerationOptions,
    output: &OutputArgs,
) -> Result<()> {
    let ingredients = build_ingredients(specs)?;
    let (service, config) = service_from_env()?;
    let mut session = Session::new(ingredients, options);

    eprintln!("Crafting delicious recipes for you...");
    let recipes = session.generate_from_ingredients(&service).await?;
    present(recipes, output, &config)
}

pub async fn surprise(options: GenerationOptions, output: &OutputArgs) -> Result<()> {
    let (service, config) = service_from_env()?;
    let mut session = Session::new(IngredientList::new(), options);

    eprintln!("Crafting a surprise recipe for you...");
    let recipes = session.surprise_me(&service).await?;
    present(recipes, output, &config)
}

pub fn print_prompt(specs: &[String], random: bool, options: &GenerationOptions) -> Result<()> {
    let ingredients = build_ingredients(specs)?;
    let mode = if random {
        Mode::Random
    } else {
        Mode::FromIngredients
    };
    let prompt = compile(mode, ingredients.as_slice(), options)?;

    println!("{}", prompt.text);
    println!();
    println!("{}", serde_json::to_string_pretty(&prompt.schema)?);
    Ok(())
}

fn present(recipes: &[Recipe], output: &OutputArgs, config: &SousConfig) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(recipes)?);
    } else {
        let theme = ThemeStore::new(config.preferences_path()).load(Theme::system_preference());
        let palette = Palette::for_stdout(theme);
        for (index, recipe) in recipes.iter().enumerate() {
            if index > 0 {
                println!("{}", "─".repeat(40));
            }
            print!("{}", palette.card(&render_card(recipe)));
        }
    }

    if let Some(dir) = &output.export {
        let paths = export_all_to_dir(recipes, dir)
            .with_context(|| format!("Failed to export to {}", dir.display()))?;
        for path in paths {
            eprintln!("Saved {}", path.display());
        }
    }

    Ok(())
}
