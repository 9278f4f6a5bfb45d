//! Configured entry point over the free functions

use std::borrow::Cow;

use crate::api::{Config, TextStats};
use crate::error::Result;
use crate::{abbreviation, casing, classify, measure, presence, transform};

/// Text operations bound to one [`Config`]
///
/// Casing calls use the configured locale rather than the process default,
/// so two `TextOps` values with different locales can be used side by side.
#[derive(Debug, Clone, Default)]
pub struct TextOps {
    config: Config,
}

impl TextOps {
    /// Create with the default configuration (invariant locale, `.` separator)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a validated configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create for a locale tag, other settings at their defaults
    pub fn with_locale(tag: &str) -> Result<Self> {
        let config = Config::builder().locale(tag)?.build()?;
        Ok(Self::with_config(config))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_absent_or_empty(&self, text: Option<&str>) -> bool {
        presence::is_absent_or_empty(text)
    }

    pub fn is_absent_or_blank(&self, text: Option<&str>) -> bool {
        presence::is_absent_or_blank(text)
    }

    pub fn is_alphanumeric(&self, text: Option<&str>) -> bool {
        classify::is_alphanumeric(text)
    }

    pub fn reverse<'a>(&self, text: Option<&'a str>) -> Option<Cow<'a, str>> {
        transform::reverse(text)
    }

    pub fn collapse_whitespace<'a>(&self, text: Option<&'a str>) -> Option<Cow<'a, str>> {
        transform::collapse_whitespace(text)
    }

    pub fn tabs_to_spaces<'a>(&self, text: Option<&'a str>) -> Option<Cow<'a, str>> {
        transform::tabs_to_spaces(text)
    }

    pub fn newlines_to_spaces<'a>(&self, text: Option<&'a str>) -> Option<Cow<'a, str>> {
        transform::newlines_to_spaces(text)
    }

    pub fn clean<'a>(&self, text: Option<&'a str>) -> Option<Cow<'a, str>> {
        transform::clean(text)
    }

    /// Title-case each word with the configured locale
    pub fn capitalize_each_word<'a>(&self, text: Option<&'a str>) -> Option<Cow<'a, str>> {
        casing::capitalize_each_word_with(text, &self.config.locale)
    }

    /// Sentence-case on the configured separator and locale
    pub fn to_sentence_case<'a>(&self, text: Option<&'a str>) -> Option<Cow<'a, str>> {
        casing::to_sentence_case_with(text, self.config.sentence_separator, &self.config.locale)
    }

    /// Initials of each word, upper-cased with the configured locale
    pub fn to_abbreviation<'a>(&self, text: Option<&'a str>) -> Option<Cow<'a, str>> {
        abbreviation::to_abbreviation_with(text, &self.config.locale)
    }

    /// Character count in the configured mode (raw or clean)
    pub fn character_count(&self, text: Option<&str>) -> usize {
        measure::character_count(text, self.config.clean_counts)
    }

    pub fn word_count(&self, text: Option<&str>) -> usize {
        measure::word_count(text)
    }

    /// Collect every measurement of the text in one record
    pub fn analyze(&self, text: Option<&str>) -> TextStats {
        let abbreviation = if presence::is_absent_or_blank(text) {
            None
        } else {
            self.to_abbreviation(text).map(Cow::into_owned)
        };

        TextStats {
            characters: measure::character_count(text, false),
            clean_characters: measure::character_count(text, true),
            words: measure::word_count(text),
            is_alphanumeric: classify::is_alphanumeric(text),
            abbreviation,
        }
    }
}
