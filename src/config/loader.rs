//! Application config discovery
//!
//! Lookup order (first existing file wins):
//! 1. ./.anyext.toml (project-specific)
//! 2. $ANYEXT_CONFIG (environment variable)
//! 3. ~/.config/anyext/config.toml (user-global)
//!
//! Without any file the built-in defaults apply.

use crate::config::{default_data_file, UserConfig, DEFAULT_LOG_LEVEL};
use crate::registry::MARKDOWN_KIND;
use crate::types::ExtError;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_ENV_VAR: &str = "ANYEXT_CONFIG";

#[derive(Debug, Default)]
pub struct ConfigLoader {
    user_config: Option<UserConfig>,
    source: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Result<Self, ExtError> {
        for path in Self::candidates() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        debug!("No user config file found");
        Ok(Self::default())
    }

    /// Load a specific config file.
    pub fn from_file(path: &Path) -> Result<Self, ExtError> {
        debug!("Loading user config from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExtError::Config(format!("Failed to read config: {}", e)))?;

        let config: UserConfig = toml::from_str(&content)
            .map_err(|e| ExtError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(Self {
            user_config: Some(config),
            source: Some(path.to_path_buf()),
        })
    }

    fn candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(".anyext.toml"));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            candidates.push(PathBuf::from(config_path));
        }

        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("anyext").join("config.toml"));
        }

        candidates
    }

    /// Path of the config file in use, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn data_file(&self) -> PathBuf {
        self.settings()
            .and_then(|s| s.data_file.clone())
            .unwrap_or_else(default_data_file)
    }

    pub fn log_level(&self) -> String {
        self.settings()
            .and_then(|s| s.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }

    pub fn kind(&self) -> String {
        self.settings()
            .and_then(|s| s.kind.clone())
            .unwrap_or_else(|| MARKDOWN_KIND.to_string())
    }

    fn settings(&self) -> Option<&crate::config::Settings> {
        self.user_config.as_ref().and_then(|c| c.settings.as_ref())
    }
}
