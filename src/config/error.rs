//! Configuration-specific error types
//!
//! Configuration failures are deployment defects, not missing data:
//! either the static configuration itself is malformed (rejected once at
//! load time) or a request referenced a configuration name that was
//! never defined.

use thiserror::Error;

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration with the requested name exists
    #[error("Configuration for \"{0}\" item type does not exist")]
    UnknownConfig(String),

    /// An item-type identifier failed the identifier pattern
    #[error(
        "Invalid item type identifier \"{0}\": identifiers must start with a letter and contain only letters, digits and underscores"
    )]
    InvalidItemType(String),

    /// A configured default page size was not positive
    #[error("Invalid default limit for item type \"{0}\": must be greater than zero")]
    InvalidLimit(String),

    /// The configuration source could not be read or parsed
    #[error("Configuration source error: {0}")]
    SourceError(#[from] config::ConfigError),

    /// Inline TOML configuration could not be parsed
    #[error("Configuration parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
