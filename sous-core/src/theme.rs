//! Light/dark theme preference.
//!
//! Persisted as the single `"theme"` key of a JSON preferences file; read at
//! startup and written on every change.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const THEME_KEY: &str = "theme";

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid preferences file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unknown theme: {0} (expected \"light\" or \"dark\")")]
    UnknownTheme(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Guess the terminal's scheme from `COLORFGBG` ("fg;bg" color indices).
    ///
    /// Background indices 0-6 and 8 are dark colors.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        Some(if bg <= 6 || bg == 8 {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    /// The OS/terminal preference, if one can be detected.
    pub fn system_preference() -> Option<Self> {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| Self::from_colorfgbg(&v))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

/// Preferences file holding the theme.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored theme, else `system`, else light.
    ///
    /// A missing or unreadable file, or an unrecognized value, falls through
    /// to the defaults.
    pub fn load(&self, system: Option<Theme>) -> Theme {
        match self.stored() {
            Ok(Some(theme)) => theme,
            Ok(None) => system.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable theme preference");
                system.unwrap_or_default()
            }
        }
    }

    /// The theme recorded in the file, if any.
    pub fn stored(&self) -> Result<Option<Theme>, ThemeError> {
        let prefs = self.read_prefs()?;
        Ok(match prefs.get(THEME_KEY).and_then(Value::as_str) {
            Some(value) => match value.parse() {
                Ok(theme) => Some(theme),
                Err(_) => {
                    tracing::warn!(value = value, "Ignoring unknown stored theme");
                    None
                }
            },
            None => None,
        })
    }

    /// Persist `theme`, keeping any other keys in the file.
    pub fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        let mut prefs = match self.read_prefs() {
            Ok(prefs) => prefs,
            Err(ThemeError::InvalidJson(_)) => Map::new(),
            Err(e) => return Err(e),
        };
        prefs.insert(THEME_KEY.to_string(), Value::from(theme.as_str()));

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|source| self.io_error(source))?;
        }
        let content = serde_json::to_string_pretty(&prefs)?;
        fs::write(&self.path, content).map_err(|source| self.io_error(source))?;

        tracing::debug!(theme = %theme, path = %self.path.display(), "Theme saved");
        Ok(())
    }

    /// Flip the current theme and persist it.
    pub fn toggle(&self, system: Option<Theme>) -> Result<Theme, ThemeError> {
        let theme = self.load(system).toggled();
        self.save(theme)?;
        Ok(theme)
    }

    fn read_prefs(&self) -> Result<Map<String, Value>, ThemeError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => return Err(self.io_error(source)),
        };
        Ok(serde_json::from_str(&content)?)
    }

    fn io_error(&self, source: std::io::Error) -> ThemeError {
        ThemeError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> ThemeStore {
        ThemeStore::new(dir.path().join("prefs").join("preferences.json"))
    }

    #[test]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        assert_eq!(store.load(None), Theme::Light);
        assert_eq!(store.load(Some(Theme::Dark)), Theme::Dark);
    }

    #[test]
    fn test_stored_value_wins_over_system() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(Some(Theme::Dark)), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        assert_eq!(store.toggle(None).unwrap(), Theme::Dark);
        assert_eq!(store.load(None), Theme::Dark);
        assert_eq!(store.toggle(None).unwrap(), Theme::Light);

        let content = fs::read_to_string(store.path()).unwrap();
        let prefs: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(prefs["theme"], "light");
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"theme": "sepia"}"#).unwrap();

        assert_eq!(store.stored().unwrap(), None);
        assert_eq!(store.load(Some(Theme::Dark)), Theme::Dark);
    }

    #[test]
    fn test_save_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"other": 1}"#).unwrap();

        store.save(Theme::Dark).unwrap();
        let prefs: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(prefs["other"], 1);
        assert_eq!(prefs["theme"], "dark");
    }

    #[test]
    fn test_corrupt_file_is_overwritten_on_save() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not json").unwrap();

        assert_eq!(store.load(None), Theme::Light);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(None), Theme::Dark);
    }

    #[test]
    fn test_colorfgbg() {
        assert_eq!(Theme::from_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(Theme::from_colorfgbg("15;default;0"), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg("garbage"), None);
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("Dark".parse::<Theme>().is_err());
    }
}
