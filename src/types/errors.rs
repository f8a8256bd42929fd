use thiserror::Error;

/// Failures raised by a host while binding extensions to a view type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("host rejected registration as '{kind}': {reason}")]
    Rejected { kind: String, reason: String },

    #[error("extension already handed to the host: {0}")]
    AlreadyRegistered(String),
}

#[derive(Error, Debug)]
pub enum ExtError {
    #[error("Failed to load settings: {0}")]
    ConfigLoad(String),

    #[error("Failed to save settings: {0}")]
    ConfigSave(String),

    #[error("Registration failed: {0}")]
    Registration(#[from] RegistrationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtError>;
