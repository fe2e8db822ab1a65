//! Client configuration.
//!
//! Read from `~/.config/placepick/config.toml`, then overridden by
//! environment variables:
//!
//! - `PLACEPICK_API_URL`
//! - `PLACEPICK_ACCESS_TOKEN`
//! - `PLACEPICK_TIMEOUT_SECS`
//!
//! A missing default config file is not an error; defaults apply.

use crate::paths::PlacepickPaths;
use placepick_core::catalog::CatalogConfig;
use placepick_core::{PlacepickError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const ENV_API_URL: &str = "PLACEPICK_API_URL";
pub const ENV_ACCESS_TOKEN: &str = "PLACEPICK_ACCESS_TOKEN";
pub const ENV_TIMEOUT_SECS: &str = "PLACEPICK_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub catalog: CatalogConfig,
}

/// User-account API endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Sent as a bearer token when present.
    pub access_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            access_token: None,
        }
    }
}

impl ClientConfig {
    /// Loads the configuration, applying environment overrides.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and silently skipped when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PlacepickPaths::config_file()
                    .map_err(|e| PlacepickError::config(e.to_string()))?;
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    tracing::debug!(
                        path = %default_path.display(),
                        "No config file found, using defaults"
                    );
                    Self::default()
                }
            }
        };

        let config = config.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PlacepickError::config(format!(
                "Failed to read configuration file at {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Applies overrides looked up by environment variable name.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
            self.api.access_token = Some(token).filter(|token| !token.is_empty());
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            self.api.timeout_secs = timeout.trim().parse().map_err(|_| {
                PlacepickError::config(format!("{} must be a number of seconds", ENV_TIMEOUT_SECS))
            })?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(PlacepickError::config(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(PlacepickError::config("api.timeout_secs must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.catalog, CatalogConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ClientConfig::from_toml_str(
            r#"
            [api]
            base_url = "https://api.placepick.example"

            [catalog]
            moods = ["조용한", "활기찬"]
            "#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "https://api.placepick.example");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.catalog.moods.items(), ["조용한", "활기찬"]);
        assert_eq!(config.catalog.places, CatalogConfig::default().places);
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let err = ClientConfig::from_toml_str(
            r#"
            [catalog]
            places = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PlacepickError::Serialization { ref format, .. } if format == "TOML"
        ));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = ClientConfig::from_toml_str(
            r#"
            [api]
            base_url = "https://file.example"
            access_token = "from-file"
            "#,
        )
        .unwrap()
        .with_overrides(env(&[
            (ENV_API_URL, "https://env.example"),
            (ENV_TIMEOUT_SECS, " 5 "),
        ]))
        .unwrap();

        assert_eq!(config.api.base_url, "https://env.example");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.access_token.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_empty_token_override_clears_token() {
        let mut config = ClientConfig::default();
        config.api.access_token = Some("stale".to_string());

        let config = config.with_overrides(env(&[(ENV_ACCESS_TOKEN, "")])).unwrap();
        assert_eq!(config.api.access_token, None);
    }

    #[test]
    fn test_bad_timeout_override() {
        let err = ClientConfig::default()
            .with_overrides(env(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_validate_rejects_non_http_url_and_zero_timeout() {
        let mut config = ClientConfig::default();
        config.api.base_url = "localhost:8080".to_string();
        assert!(config.validate().unwrap_err().is_config());

        let mut config = ClientConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ntimeout_secs = 12").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api.timeout_secs, 12);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClientConfig::load(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(err.is_config());
    }
}
