//! Plugin lifecycle
//!
//! Ties the persisted settings to the extension registry: replay once on
//! load, then persist-and-reconcile on every save.

use crate::config::{load_settings, ConfigStore, PluginSettings};
use crate::registry::{ExtensionRegistry, HostRegistrar};
use crate::types::Result;
use tracing::info;

pub struct Plugin<S, R> {
    /// Where the raw extension list is persisted
    store: S,

    /// Last settings loaded or saved
    settings: PluginSettings,

    /// Registration state for this process
    registry: ExtensionRegistry<R>,
}

impl<S, R> Plugin<S, R>
where
    S: ConfigStore,
    R: HostRegistrar,
{
    pub fn new(store: S, registry: ExtensionRegistry<R>) -> Self {
        Self {
            store,
            settings: PluginSettings::default(),
            registry,
        }
    }

    /// Load the persisted list and register it with the host.
    ///
    /// Unreadable settings fall back to an empty list. Registration
    /// failures are returned.
    pub async fn on_load(&mut self) -> Result<Vec<String>> {
        self.settings = load_settings(&self.store).await;
        let delta = self
            .registry
            .reconcile(&self.settings.extensions_comma_delimited)
            .await?;

        info!(
            "Plugin loaded with {} registered extension(s)",
            self.registry.registered().len()
        );
        Ok(delta)
    }

    /// Persist `raw`, then register whatever it adds.
    ///
    /// Nothing is registered when persisting fails.
    pub async fn save_and_register(&mut self, raw: &str) -> Result<Vec<String>> {
        self.store.save(raw).await?;
        self.settings = PluginSettings::new(raw);
        self.registry.reconcile(raw).await
    }

    pub fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    pub fn registry(&self) -> &ExtensionRegistry<R> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ExtensionRegistry<R> {
        &mut self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigStore;
    use crate::registry::RecordingRegistrar;
    use crate::types::ExtError;

    fn plugin(store: MemoryConfigStore) -> Plugin<MemoryConfigStore, RecordingRegistrar> {
        Plugin::new(store, ExtensionRegistry::new(RecordingRegistrar::new()))
    }

    #[tokio::test]
    async fn test_on_load_replays_persisted_list() {
        let mut plugin = plugin(MemoryConfigStore::with_raw("rmd, mdx"));

        assert_eq!(plugin.on_load().await.unwrap(), vec!["mdx", "rmd"]);
        assert_eq!(plugin.settings().extensions_comma_delimited, "rmd, mdx");
        assert_eq!(plugin.registry().registered_pretty(), "mdx, rmd");
    }

    #[tokio::test]
    async fn test_on_load_with_broken_store() {
        let store = MemoryConfigStore::with_raw("rmd");
        store.fail_loads(true);
        let mut plugin = plugin(store);

        assert!(plugin.on_load().await.unwrap().is_empty());
        assert_eq!(plugin.settings(), &PluginSettings::default());
        assert_eq!(plugin.registry().registrar().call_count(), 0);
    }

    #[tokio::test]
    async fn test_save_and_register() {
        let mut plugin = plugin(MemoryConfigStore::new());
        plugin.on_load().await.unwrap();

        let delta = plugin.save_and_register("txt , org").await.unwrap();
        assert_eq!(delta, vec!["org", "txt"]);
        assert_eq!(plugin.store().raw().await.as_deref(), Some("txt , org"));
        assert_eq!(plugin.settings().extensions_comma_delimited, "txt , org");
    }

    #[tokio::test]
    async fn test_failed_save_skips_registration() {
        let mut plugin = plugin(MemoryConfigStore::new());
        plugin.store().fail_saves(true);

        let err = plugin.save_and_register("txt").await.unwrap_err();
        assert!(matches!(err, ExtError::ConfigSave(_)));
        assert!(plugin.registry().registered().is_empty());
        assert_eq!(plugin.registry().registrar().call_count(), 0);
        assert_eq!(plugin.settings(), &PluginSettings::default());
    }

    #[tokio::test]
    async fn test_on_load_propagates_registration_failure() {
        let mut plugin = plugin(MemoryConfigStore::with_raw("rmd"));
        plugin.registry_mut().registrar_mut().fail_next("renderer not ready");

        let err = plugin.on_load().await.unwrap_err();
        assert!(matches!(err, ExtError::Registration(_)));
        assert!(plugin.registry().registered().is_empty());

        // The next load replays the same list
        assert_eq!(plugin.on_load().await.unwrap(), vec!["rmd"]);
    }
}
