//! Persisted plugin settings

use crate::config::ConfigStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Settings the user edits. The extension list is kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    #[serde(rename = "extensionsCommaDelimited")]
    pub extensions_comma_delimited: String,
}

impl PluginSettings {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            extensions_comma_delimited: raw.into(),
        }
    }
}

/// Load settings from `store`, falling back to defaults on any failure.
///
/// A broken settings file must never stop the startup path, so load errors
/// are logged and swallowed here.
pub async fn load_settings<S: ConfigStore + ?Sized>(store: &S) -> PluginSettings {
    match store.load().await {
        Ok(Some(raw)) => {
            debug!("Loaded persisted extension list: {:?}", raw);
            PluginSettings::new(raw)
        }
        Ok(None) => {
            debug!("No persisted settings, using defaults");
            PluginSettings::default()
        }
        Err(e) => {
            warn!("{}; using default settings", e);
            PluginSettings::default()
        }
    }
}
