use crate::app::models::ResolvedConfig;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no --config is given.
pub const DEFAULT_CONFIG_NAME: &str = ".codesnapshot.json";

/// On-disk shape of the configuration document. Every field is required and
/// no others are accepted.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub directories: Vec<PathBuf>,
    pub output_file: PathBuf,
    pub include_extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub exclude_files: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("include extension {0:?} is missing its leading '.'")]
    BareExtension(String),
    #[error("no configuration file found (pass --config or create .codesnapshot.json)")]
    NotFound,
}

/// Picks the configuration file: an explicit path wins, then the default name
/// in the working directory, then the per-user config location.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let local = PathBuf::from(DEFAULT_CONFIG_NAME);
    if local.exists() {
        return Ok(local);
    }

    if let Some(home) = dirs::home_dir() {
        let fallback = home
            .join(".config")
            .join("code_snapshot")
            .join("config.json");
        if fallback.exists() {
            return Ok(fallback);
        }
    }

    Err(ConfigError::NotFound)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        for ext in &self.include_extensions {
            if !ext.starts_with('.') {
                return Err(ConfigError::BareExtension(ext.clone()));
            }
        }
        Ok(())
    }

    /// Resolves the configured paths against `base` (the directory holding
    /// the configuration file). Absolute entries are kept as-is.
    pub fn resolve(self, base: &Path) -> ResolvedConfig {
        ResolvedConfig {
            directories: self
                .directories
                .iter()
                .map(|dir| base.join(dir))
                .collect(),
            output_file: base.join(&self.output_file),
            include_extensions: self.include_extensions,
            exclude_dirs: self.exclude_dirs,
            exclude_files: self.exclude_files,
        }
    }
}
