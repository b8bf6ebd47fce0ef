//! Configuration loading for the LSP engine
//!
//! Loads settings from YAML configuration files.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names searched for in the workspace root, in order
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    ".stylus-lsp.yaml",
    ".stylus-lsp.yml",
    "stylus-lsp.yaml",
    "stylus-lsp.yml",
];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Main engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Engine settings
    pub engine: EngineSettings,
    /// Which documents are served and how completion is triggered
    pub language: LanguageSettings,
}

/// Core engine settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Server name
    pub name: String,
    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    pub log_level: String,
}

/// Document selection and trigger settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguageSettings {
    /// Language identifiers reported by the client on didOpen
    pub language_ids: Vec<String>,
    /// Accepted URI schemes
    pub schemes: Vec<String>,
    /// Characters that trigger completion
    pub trigger_characters: Vec<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            name: "stylus-lsp".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            language_ids: vec!["stylus-rust".to_string(), "rust".to_string()],
            schemes: vec!["file".to_string()],
            trigger_characters: [".", ":", "(", "[", "#"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from the first config file in `workspace_root`.
    ///
    /// Defaults when there is none; an unreadable or invalid file is an error
    /// so the caller can report it once logging is up.
    pub fn load_default(workspace_root: &Path) -> Result<Self, ConfigError> {
        let found = CONFIG_FILE_NAMES
            .iter()
            .map(|name| workspace_root.join(name))
            .find(|candidate| candidate.exists());

        match found {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}
