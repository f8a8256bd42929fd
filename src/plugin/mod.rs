//! Plugin lifecycle and the settings surface around the registry

pub mod lifecycle;
pub mod surface;

pub use lifecycle::Plugin;
pub use surface::{SettingsSurface, SettingsView, REMOVAL_NOTE};
