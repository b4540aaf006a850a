// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod fields;
pub mod helpers;
pub mod validation;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use config::{ConfigError, UnknownFieldPolicy, ValidationConfig};
pub use error::ApiError;
pub use helpers::{is_valid_name, is_valid_phone_number, safe_phone_log};
pub use validation::{ValidationError, ValidationResult, Validator};
