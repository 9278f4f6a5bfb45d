//! Configuration for the [`TextOps`](crate::api::TextOps) facade

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::casing::Locale;
use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Separator used for sentence casing
    pub const SENTENCE_SEPARATOR: char = '.';

    /// Count raw characters unless told otherwise
    pub const CLEAN_COUNTS: bool = false;
}

/// Settings applied by every facade call
///
/// Loadable from TOML; every key is optional:
///
/// ```toml
/// locale = "tr-TR"
/// sentence_separator = "."
/// clean_counts = true
/// ```
///
/// Deserializing validates the values, so a `Config` read through any serde
/// format upholds the same rules as one built with [`ConfigBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    pub(crate) locale: Locale,
    pub(crate) sentence_separator: char,
    pub(crate) clean_counts: bool,
}

/// Unvalidated on-disk form of [`Config`]
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    locale: Locale,
    sentence_separator: char,
    clean_counts: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        let Config {
            locale,
            sentence_separator,
            clean_counts,
        } = Config::default();
        Self {
            locale,
            sentence_separator,
            clean_counts,
        }
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self> {
        let config = Self {
            locale: raw.locale,
            sentence_separator: raw.sentence_separator,
            clean_counts: raw.clean_counts,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::invariant(),
            sentence_separator: defaults::SENTENCE_SEPARATOR,
            clean_counts: defaults::CLEAN_COUNTS,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        // Parsed in two steps so rule violations surface as
        // `Error::Configuration` rather than as a TOML error
        let raw: RawConfig = toml::from_str(source)?;
        let config = Config::try_from(raw)?;
        log::debug!(
            "Loaded configuration: locale={}, separator={:?}, clean_counts={}",
            config.locale,
            config.sentence_separator,
            config.clean_counts
        );
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading configuration from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn sentence_separator(&self) -> char {
        self.sentence_separator
    }

    pub fn clean_counts(&self) -> bool {
        self.clean_counts
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        // Cleaning rewrites whitespace before the text is split
        if self.sentence_separator.is_whitespace() {
            return Err(Error::Configuration(format!(
                "sentence_separator must not be whitespace, got {:?}",
                self.sentence_separator
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    locale: Option<Locale>,
    sentence_separator: Option<char>,
    clean_counts: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale by tag
    pub fn locale(mut self, tag: &str) -> Result<Self> {
        self.locale = Some(Locale::parse(tag)?);
        Ok(self)
    }

    /// Set the sentence separator
    pub fn sentence_separator(mut self, separator: char) -> Self {
        self.sentence_separator = Some(separator);
        self
    }

    /// Count characters of the clean text instead of the raw text
    pub fn clean_counts(mut self, clean: bool) -> Self {
        self.clean_counts = Some(clean);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(locale) = self.locale {
            config.locale = locale;
        }

        if let Some(separator) = self.sentence_separator {
            config.sentence_separator = separator;
        }

        if let Some(clean) = self.clean_counts {
            config.clean_counts = clean;
        }

        config.validate()?;
        Ok(config)
    }
}
