//! Configuration loading
//!
//! A small TOML file under the platform config dir. Every field has a
//! default, and a missing file is not an error; only a file that exists
//! but fails to parse is surfaced to the caller.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_TICK_RATE_MS: u64 = 33;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BevisConfig {
    /// UI frame interval in milliseconds.
    pub tick_rate_ms: u64,
    /// Theme name looked up in the theme table.
    pub theme: String,
}

impl Default for BevisConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            theme: "sikt".to_string(),
        }
    }
}

impl BevisConfig {
    /// `<config dir>/bevis/config.toml`, if the platform has a config dir.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bevis").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file (or the whole config dir) is absent.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BevisConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, BevisConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_rate_ms = 16\n").unwrap();

        let config = BevisConfig::load_from(&path).unwrap();
        assert_eq!(config.tick_rate_ms, 16);
        assert_eq!(config.theme, "sikt");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tick_rate_ms = \"not a number\"\n").unwrap();

        let err = BevisConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
