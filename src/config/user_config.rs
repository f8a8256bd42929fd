//! User configuration file parsing

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    pub settings: Option<Settings>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub data_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub kind: Option<String>,
}
