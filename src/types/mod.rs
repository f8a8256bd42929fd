//! Shared types

pub mod errors;

pub use errors::{ExtError, RegistrationError, Result};
