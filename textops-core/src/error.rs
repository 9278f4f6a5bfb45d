//! Error types

use thiserror::Error;

/// Errors raised while configuring text operations
///
/// The text operations themselves never fail: absent, empty and blank input
/// all have defined results.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed locale tag
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Configuration values that parse but cannot be used
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The process-wide default locale was already installed
    #[error("Default locale already set to '{0}'")]
    DefaultLocaleAlreadySet(String),

    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for the expected schema
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, Error>;
