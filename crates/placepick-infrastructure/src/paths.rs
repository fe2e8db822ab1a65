//! Path resolution for Placepick configuration files.
//!
//! ```text
//! ~/.config/placepick/        # Config directory (platform-specific via `dirs`)
//! └── config.toml             # API endpoint, access token, catalogs
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

const APP_DIR: &str = "placepick";

pub struct PlacepickPaths;

impl PlacepickPaths {
    /// Returns the Placepick configuration directory (e.g. `~/.config/placepick/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_app_dir() {
        // Headless CI images may lack a config dir; nothing to check then.
        if let Ok(path) = PlacepickPaths::config_file() {
            assert!(path.ends_with("placepick/config.toml"));
        }
    }
}
