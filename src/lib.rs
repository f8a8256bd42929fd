//! AnyExt - treat arbitrary file extensions as a host's native markup
//!
//! The user keeps a comma-delimited list of extensions. This crate registers
//! each one with the host exactly once, persists the list across restarts and
//! picks up newly added extensions at runtime. The host cannot unregister an
//! extension, so registration state only ever grows within a process.

pub mod config;
pub mod plugin;
pub mod registry;
pub mod types;

pub use config::{ConfigLoader, ConfigStore, FileConfigStore, MemoryConfigStore, PluginSettings};
pub use plugin::{Plugin, SettingsSurface, SettingsView};
pub use registry::{
    parse_extensions, ExtensionRegistry, HostRegistrar, JournalRegistrar, RecordingRegistrar,
    RegisteredSet, MARKDOWN_KIND,
};
pub use types::{ExtError, RegistrationError};
