//! Built-in defaults used when no config file says otherwise

use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name of the persisted plugin settings.
pub const DATA_FILE_NAME: &str = "data.json";

/// Default location of the persisted plugin settings
/// (`<data_dir>/anyext/data.json`, falling back to the working directory).
pub fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("anyext"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_file() {
        let path = default_data_file();
        assert!(path.ends_with(DATA_FILE_NAME));
    }
}
