//! Toolkit-free settings surface
//!
//! Holds the user's uncommitted edit and turns the plugin state into a
//! `SettingsView` a frontend can draw.

use crate::config::ConfigStore;
use crate::plugin::Plugin;
use crate::registry::HostRegistrar;
use crate::types::Result;
use serde::Serialize;
use std::fmt;

/// Shown under the settings: removed extensions stay active until restart.
pub const REMOVAL_NOTE: &str = "Note: extensions cannot be removed once registered. \
Restart the host to reset the list of registered extensions.";

/// Everything the settings panel displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsView {
    pub name: String,
    pub description: String,
    pub placeholder: String,
    pub value: String,
    pub save_name: String,
    pub save_description: String,
    pub note: String,
}

impl fmt::Display for SettingsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  value: {:?}", self.value)?;
        writeln!(f, "{}", self.save_name)?;
        writeln!(f, "  {}", self.save_description)?;
        write!(f, "{}", self.note)
    }
}

pub struct SettingsSurface<S, R> {
    plugin: Plugin<S, R>,
    pending: String,
}

impl<S, R> SettingsSurface<S, R>
where
    S: ConfigStore,
    R: HostRegistrar,
{
    /// Wrap a loaded plugin, seeding the text field from its settings.
    pub fn new(plugin: Plugin<S, R>) -> Self {
        let pending = plugin.settings().extensions_comma_delimited.clone();
        Self { plugin, pending }
    }

    /// Replace the uncommitted text field contents.
    pub fn edit(&mut self, raw: impl Into<String>) {
        self.pending = raw.into();
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Persist and register the pending edit, then redraw.
    pub async fn save(&mut self) -> Result<(Vec<String>, SettingsView)> {
        let pending = self.pending.clone();
        let delta = self.plugin.save_and_register(&pending).await?;
        Ok((delta, self.render()))
    }

    pub fn render(&self) -> SettingsView {
        SettingsView {
            name: format!(
                "File extensions to recognize as {}",
                display_kind(self.plugin.registry().kind())
            ),
            description: format!(
                "Comma-delimited list without dots (e.g. \"txt,mdx,rmd\"). \
                 Currently registered extensions: {}",
                self.plugin.registry().registered_pretty()
            ),
            placeholder: "Enter your custom file extensions".to_string(),
            value: self.pending.clone(),
            save_name: "Save file extensions".to_string(),
            save_description: "Save and register the current set of file extensions."
                .to_string(),
            note: REMOVAL_NOTE.to_string(),
        }
    }

    pub fn plugin(&self) -> &Plugin<S, R> {
        &self.plugin
    }

    pub fn into_plugin(self) -> Plugin<S, R> {
        self.plugin
    }
}

/// `markdown` -> `Markdown`
fn display_kind(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
