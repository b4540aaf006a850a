// src/common/config.rs
//! Validation configuration loaded from the environment

use std::env;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const UNKNOWN_FIELDS_ENV: &str = "VALIDATION_UNKNOWN_FIELDS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid unknown field policy: '{0}' (expected 'allow' or 'reject')")]
    InvalidUnknownFieldPolicy(String),
}

/// How keys outside a form's declared fields are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFieldPolicy {
    /// Pass unknown keys through untouched
    #[default]
    Allow,
    /// Report each unknown key as a field error
    Reject,
}

impl FromStr for UnknownFieldPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allow" => Ok(UnknownFieldPolicy::Allow),
            "reject" => Ok(UnknownFieldPolicy::Reject),
            _ => Err(ConfigError::InvalidUnknownFieldPolicy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    pub unknown_fields: UnknownFieldPolicy,
}

impl ValidationConfig {
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Reject,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_setting(env::var(UNKNOWN_FIELDS_ENV).ok().as_deref())
    }

    /// Builds the config from the raw `VALIDATION_UNKNOWN_FIELDS` value
    pub fn from_setting(unknown_fields: Option<&str>) -> Result<Self, ConfigError> {
        let unknown_fields = match unknown_fields {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => UnknownFieldPolicy::default(),
        };

        debug!(?unknown_fields, "Loaded validation config");

        Ok(Self { unknown_fields })
    }
}
