//! Durable storage for the raw extension list

use crate::config::PluginSettings;
use crate::types::{ExtError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

/// Persistence for the single settings field.
///
/// Load failures surface as `ExtError::ConfigLoad`, save failures as
/// `ExtError::ConfigSave`.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Read the persisted raw list, `None` if nothing was ever saved.
    async fn load(&self) -> Result<Option<String>>;

    /// Overwrite the persisted raw list.
    async fn save(&self, raw: &str) -> Result<()>;
}

/// JSON settings file on disk.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_error(&self, e: impl std::fmt::Display) -> ExtError {
        ExtError::ConfigSave(format!("{}: {}", self.path.display(), e))
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    async fn load(&self) -> Result<Option<String>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Settings file not found: {}", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(ExtError::ConfigLoad(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let settings: PluginSettings = serde_json::from_str(&content)
            .map_err(|e| ExtError::ConfigLoad(format!("{}: {}", self.path.display(), e)))?;

        Ok(Some(settings.extensions_comma_delimited))
    }

    async fn save(&self, raw: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.save_error(e))?;
        }

        let content = serde_json::to_string_pretty(&PluginSettings::new(raw))
            .map_err(|e| self.save_error(e))?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| self.save_error(e))?;

        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Store kept in memory, with switchable failures.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    raw: Mutex<Option<String>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
            ..Self::default()
        }
    }

    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Currently stored raw list.
    pub async fn raw(&self) -> Option<String> {
        self.raw.lock().await.clone()
    }
}

#[async_trait]
impl ConfigStore for MemoryConfigStore {
    async fn load(&self) -> Result<Option<String>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(ExtError::ConfigLoad("memory store unavailable".to_string()));
        }
        Ok(self.raw.lock().await.clone())
    }

    async fn save(&self, raw: &str) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ExtError::ConfigSave("memory store is read-only".to_string()));
        }
        *self.raw.lock().await = Some(raw.to_string());
        Ok(())
    }
}
