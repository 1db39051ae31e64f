//! Configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Fake,
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "fake" => Ok(ProviderKind::Fake),
            other => Err(format!("unknown provider: {}", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SousConfig {
    pub provider: ProviderKind,
    /// Required when `provider` is Gemini; checked when the provider is built.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Where preferences live.
    pub data_dir: PathBuf,
}

impl SousConfig {
    /// Load configuration from environment variables.
    ///
    /// - `SOUS_PROVIDER`: "gemini" (default) or "fake"
    /// - `GEMINI_API_KEY`: API key for Gemini
    /// - `SOUS_MODEL`: Model name (default: "gemini-2.5-flash")
    /// - `SOUS_API_BASE_URL`: API base URL
    /// - `SOUS_DATA_DIR`: Data directory (default: "~/.sous")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("SOUS_PROVIDER") {
            Some(value) => value.parse::<ProviderKind>().map_err(|_| ConfigError::InvalidValue {
                var: "SOUS_PROVIDER".to_string(),
                value,
            })?,
            None => ProviderKind::Gemini,
        };

        let api_key = lookup("GEMINI_API_KEY").filter(|k| !k.trim().is_empty());
        let model = lookup("SOUS_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = lookup("SOUS_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let data_dir = lookup("SOUS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_data_dir);

        Ok(Self {
            provider,
            api_key,
            model,
            base_url,
            data_dir,
        })
    }

    /// Get the default data directory: ~/.sous
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".sous"))
            .unwrap_or_else(|| PathBuf::from("data/sous"))
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join("preferences.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SousConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.provider, ProviderKind::Gemini);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = SousConfig::from_lookup(lookup(&[
            ("SOUS_PROVIDER", "Fake"),
            ("GEMINI_API_KEY", "abc"),
            ("SOUS_MODEL", "gemini-1.5-pro"),
            ("SOUS_DATA_DIR", "/tmp/sous"),
        ]))
        .unwrap();

        assert_eq!(config.provider, ProviderKind::Fake);
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(
            config.preferences_path(),
            PathBuf::from("/tmp/sous/preferences.json")
        );
    }

    #[test]
    fn test_unknown_provider() {
        let result = SousConfig::from_lookup(lookup(&[("SOUS_PROVIDER", "openai")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = SousConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap();
        assert!(config.api_key.is_none());
    }
}
