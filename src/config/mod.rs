//! Configuration and persistence for AnyExt
//!
//! Two separate pieces live here:
//! 1. Plugin settings: the user's raw extension list, persisted verbatim
//!    through a `ConfigStore`
//! 2. Application config: optional TOML file telling the CLI where the
//!    settings live, how loudly to log and which view type to register as

mod defaults;
mod loader;
mod settings;
mod store;
mod user_config;

pub use defaults::{default_data_file, DEFAULT_LOG_LEVEL};
pub use loader::ConfigLoader;
pub use settings::{load_settings, PluginSettings};
pub use store::{ConfigStore, FileConfigStore, MemoryConfigStore};
pub use user_config::{Settings, UserConfig};
