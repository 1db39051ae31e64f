mod generate;
mod theme;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sous_core::{GenerationOptions, OptionField};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sous")]
#[command(about = "Turn the ingredients you have into AI-generated recipes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate 3 recipes from your ingredients
    Generate {
        /// Ingredient as "quantity:item" or "item" (repeatable)
        #[arg(short = 'i', long = "ingredient", required = true)]
        ingredients: Vec<String>,
        #[command(flatten)]
        options: OptionArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate 1 random recipe
    Surprise {
        #[command(flatten)]
        options: OptionArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the prompt and schema that would be sent, without calling the API
    Prompt {
        /// Ingredient as "quantity:item" or "item" (repeatable)
        #[arg(short = 'i', long = "ingredient")]
        ingredients: Vec<String>,
        /// Build the random-recipe prompt instead
        #[arg(long)]
        random: bool,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Show or change the color theme
    Theme {
        #[arg(value_enum, default_value_t = theme::ThemeAction::Show)]
        action: theme::ThemeAction,
    },
    /// List the choices offered for each option
    Options,
}

#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// Dietary preference, e.g. vegetarian
    #[arg(long)]
    diet: Option<String>,
    /// Cuisine, e.g. italian
    #[arg(long)]
    cuisine: Option<String>,
    /// Difficulty: easy, medium or hard
    #[arg(long)]
    difficulty: Option<String>,
    /// Total cooking time, e.g. "under 30 mins"
    #[arg(long = "time")]
    cooking_time: Option<String>,
    /// Language the recipes are written in
    #[arg(long)]
    language: Option<String>,
}

impl OptionArgs {
    fn to_options(&self) -> GenerationOptions {
        let mut options = GenerationOptions::default();
        let fields = [
            (OptionField::Dietary, &self.diet),
            (OptionField::Cuisine, &self.cuisine),
            (OptionField::Difficulty, &self.difficulty),
            (OptionField::CookingTime, &self.cooking_time),
            (OptionField::Language, &self.language),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                options.set(field, value);
            }
        }
        options
    }
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Also write each recipe as a .txt file into this directory
    #[arg(long)]
    export: Option<PathBuf>,
    /// Print recipes as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            ingredients,
            options,
            output,
        } => {
            generate::from_ingredients(&ingredients, options.to_options(), &output).await?;
        }
        Commands::Surprise { options, output } => {
            generate::surprise(options.to_options(), &output).await?;
        }
        Commands::Prompt {
            ingredients,
            random,
            options,
        } => {
            generate::print_prompt(&ingredients, random, &options.to_options())?;
        }
        Commands::Theme { action } => {
            theme::run(action)?;
        }
        Commands::Options => {
            list_options();
        }
    }

    Ok(())
}

fn list_options() {
    for field in OptionField::ALL {
        println!("{}: {}", field.label(), field.choices().join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "sous", "generate", "-i", "2:egg", "-i", "rice", "--cuisine", "Italian", "--time",
            "Under 30 mins", "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                ingredients,
                options,
                output,
            } => {
                assert_eq!(ingredients, vec!["2:egg", "rice"]);
                let options = options.to_options();
                assert_eq!(options.cuisine.as_deref(), Some("italian"));
                assert_eq!(options.cooking_time.as_deref(), Some("under 30 mins"));
                assert_eq!(options.language.as_deref(), Some("English"));
                assert!(output.json);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_generate_requires_an_ingredient() {
        assert!(Cli::try_parse_from(["sous", "generate"]).is_err());
    }

    #[test]
    fn test_any_option_is_unset() {
        let args = OptionArgs {
            diet: Some("Any".to_string()),
            ..Default::default()
        };
        assert_eq!(args.to_options(), GenerationOptions::default());
    }
}
