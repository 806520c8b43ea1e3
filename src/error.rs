//! Error types for search configuration.

use std::fmt;

/// Error type for option parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Option name is not one of the known tree or search parameters
    UnknownOption { name: String },
    /// Token is not of the form `name=value`
    MalformedOption { token: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => {
                write!(f, "Unknown option '{name}'")
            }
            ConfigError::MalformedOption { token } => {
                write!(f, "Malformed option '{token}', expected name=value")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
