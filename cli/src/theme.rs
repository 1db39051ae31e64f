use anyhow::Result;
use clap::ValueEnum;
use sous_core::{SousConfig, Theme, ThemeStore};
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    Light,
    Dark,
}

pub fn run(action: ThemeAction) -> Result<()> {
    let config = SousConfig::from_env()?;
    let store = ThemeStore::new(config.preferences_path());
    let system = Theme::system_preference();

    let theme = match action {
        ThemeAction::Show => store.load(system),
        ThemeAction::Toggle => store.toggle(system)?,
        ThemeAction::Light => {
            store.save(Theme::Light)?;
            Theme::Light
        }
        ThemeAction::Dark => {
            store.save(Theme::Dark)?;
            Theme::Dark
        }
    };

    println!("{}", theme);
    Ok(())
}

/// ANSI styling for recipe cards, chosen by theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    title: Option<&'static str>,
}

const RESET: &str = "\x1b[0m";

impl Palette {
    pub fn new(theme: Theme, color: bool) -> Self {
        let title = color.then_some(match theme {
            Theme::Light => "\x1b[1;32m",
            Theme::Dark => "\x1b[1;92m",
        });
        Self { title }
    }

    /// Colors only when stdout is a terminal.
    pub fn for_stdout(theme: Theme) -> Self {
        Self::new(theme, std::io::stdout().is_terminal())
    }

    /// Highlight the first line (the title) of a rendered card.
    pub fn card(&self, card: &str) -> String {
        match (self.title, card.split_once('\n')) {
            (Some(color), Some((title, rest))) => format!("{color}{title}{RESET}\n{rest}"),
            _ => card.to_string(),
        }
    }
}
