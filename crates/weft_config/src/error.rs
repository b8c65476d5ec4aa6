//! Error types for settings loading and validation.

use thiserror::Error;

/// Errors raised while loading or validating plugin settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read settings: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file is not valid TOML or has the wrong shape.
    #[error("failed to parse settings: {0}")]
    ParseError(String),

    /// A setting has a value the plugin cannot work with.
    #[error("invalid setting `{field}`: {reason}")]
    InvalidValue {
        /// The dotted path of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}
