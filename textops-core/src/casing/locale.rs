//! Locale identifiers and their casing rules

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Process-wide default, installed at most once
static DEFAULT_LOCALE: OnceLock<Locale> = OnceLock::new();

static INVARIANT: Locale = Locale { tag: String::new() };

/// Casing locale
///
/// Holds a normalised tag such as `en-US` or `tr`. The empty tag is the
/// invariant locale, which applies the Unicode default case mappings.
/// Only the primary language subtag affects casing; `tr` and `az` select the
/// Turkic dotted/dotless `i` rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    tag: String,
}

/// Case mapping family selected by a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseRules {
    Unicode,
    Turkic,
}

impl Locale {
    /// The invariant locale
    pub fn invariant() -> Self {
        INVARIANT.clone()
    }

    /// Parse a tag like `en`, `en-US`, `pt_BR` or `zh-Hant-TW`
    ///
    /// `""` and `"invariant"` give the invariant locale. The first subtag
    /// must be two or three ASCII letters, later subtags one to eight ASCII
    /// alphanumerics, separated by `-` or `_`.
    pub fn parse(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("invariant") {
            return Ok(Self::invariant());
        }

        let mut subtags = Vec::new();
        let parts = trimmed.split(|c: char| c == '-' || c == '_');
        for (index, subtag) in parts.enumerate() {
            if !is_valid_subtag(index, subtag) {
                return Err(Error::InvalidLocale(tag.to_string()));
            }
            subtags.push(normalize_subtag(index, subtag));
        }

        Ok(Self {
            tag: subtags.join("-"),
        })
    }

    /// Installed process default, or the invariant locale
    pub fn current() -> &'static Locale {
        DEFAULT_LOCALE.get().unwrap_or(&INVARIANT)
    }

    /// Install the process-wide default used by functions that take no
    /// explicit locale
    ///
    /// The default can be set once. Later calls fail and leave the first
    /// value in place, so it never changes underneath a running call.
    pub fn install_default(locale: Locale) -> Result<()> {
        match DEFAULT_LOCALE.set(locale) {
            Ok(()) => {
                log::info!("Default locale set to '{}'", Self::current());
                Ok(())
            }
            Err(rejected) => {
                let current = Self::current();
                log::warn!("Ignoring default locale '{rejected}', keeping '{current}'");
                Err(Error::DefaultLocaleAlreadySet(current.to_string()))
            }
        }
    }

    /// Normalised tag; empty for the invariant locale
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Primary language subtag; empty for the invariant locale
    pub fn language(&self) -> &str {
        self.tag.split('-').next().unwrap_or_default()
    }

    pub fn is_invariant(&self) -> bool {
        self.tag.is_empty()
    }

    fn rules(&self) -> CaseRules {
        match self.language() {
            "tr" | "az" => CaseRules::Turkic,
            _ => CaseRules::Unicode,
        }
    }

    /// Lower-case the whole text
    pub fn to_lowercase(&self, text: &str) -> String {
        match self.rules() {
            CaseRules::Unicode => text.to_lowercase(),
            CaseRules::Turkic => text
                .chars()
                .map(|ch| match ch {
                    'I' => 'ı',
                    'İ' => 'i',
                    other => other,
                })
                .collect::<String>()
                .to_lowercase(),
        }
    }

    /// Upper-case the whole text
    pub fn to_uppercase(&self, text: &str) -> String {
        match self.rules() {
            CaseRules::Unicode => text.to_uppercase(),
            CaseRules::Turkic => text
                .chars()
                .map(|ch| if ch == 'i' { 'İ' } else { ch })
                .collect::<String>()
                .to_uppercase(),
        }
    }

    /// Append the upper-case form of one character
    ///
    /// One character in, one out: letters whose upper case expands to
    /// several characters (`ß` to `SS`, `ŉ` to `ʼN`) are kept as they are.
    pub(crate) fn push_uppercase(&self, ch: char, out: &mut String) {
        match (self.rules(), ch) {
            (CaseRules::Turkic, 'i') => out.push('İ'),
            _ => {
                let upper = ch.to_uppercase();
                if upper.len() == 1 {
                    out.extend(upper);
                } else {
                    out.push(ch);
                }
            }
        }
    }

    /// Append the title-case form of one character
    ///
    /// Differs from upper case for the Latin digraph letters and `ß`, whose
    /// title case is `Ss`.
    pub(crate) fn push_titlecase(&self, ch: char, out: &mut String) {
        match ch {
            'Ǆ' | 'ǅ' | 'ǆ' => out.push('ǅ'),
            'Ǉ' | 'ǈ' | 'ǉ' => out.push('ǈ'),
            'Ǌ' | 'ǋ' | 'ǌ' => out.push('ǋ'),
            'Ǳ' | 'ǲ' | 'ǳ' => out.push('ǲ'),
            'ß' => out.push_str("Ss"),
            _ => self.push_uppercase(ch, out),
        }
    }
}

fn is_valid_subtag(index: usize, subtag: &str) -> bool {
    let len_ok = if index == 0 {
        (2..=3).contains(&subtag.len())
    } else {
        (1..=8).contains(&subtag.len())
    };
    // Only the primary language subtag is letters-only
    let allowed = |c: char| c.is_ascii_alphabetic() || (index > 0 && c.is_ascii_digit());
    len_ok && subtag.chars().all(allowed)
}

fn normalize_subtag(index: usize, subtag: &str) -> String {
    let is_alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
    match (index, subtag.len()) {
        (0, _) => subtag.to_ascii_lowercase(),
        // Region: US, BR
        (_, 2) if is_alpha => subtag.to_ascii_uppercase(),
        // Script: Hant, Latn
        (_, 4) if is_alpha => {
            let lower = subtag.to_ascii_lowercase();
            let mut chars = lower.chars();
            chars
                .next()
                .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                .unwrap_or_default()
        }
        _ => subtag.to_ascii_lowercase(),
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            write!(f, "invariant")
        } else {
            write!(f, "{}", self.tag)
        }
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalises_tags() {
        assert_eq!(Locale::parse("en").unwrap().tag(), "en");
        assert_eq!(Locale::parse("EN_us").unwrap().tag(), "en-US");
        assert_eq!(Locale::parse("zh-hant-tw").unwrap().tag(), "zh-Hant-TW");
        assert_eq!(Locale::parse("es-419").unwrap().tag(), "es-419");
        assert_eq!(Locale::parse(" tr-TR ").unwrap().language(), "tr");
    }

    #[test]
    fn test_parse_invariant() {
        assert!(Locale::parse("").unwrap().is_invariant());
        assert!(Locale::parse("Invariant").unwrap().is_invariant());
        assert_eq!(Locale::invariant(), Locale::default());
        assert_eq!(Locale::invariant().to_string(), "invariant");
        assert_eq!(Locale::invariant().language(), "");
    }

    #[test]
    fn test_parse_rejects_malformed_tags() {
        for tag in ["e", "english", "en-", "en--US", "e1", "en-toolongsubtag", "en US"] {
            let err = Locale::parse(tag).unwrap_err();
            assert!(matches!(err, Error::InvalidLocale(_)), "accepted {tag:?}");
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let locale: Locale = "pt_br".parse().unwrap();
        assert_eq!(locale.to_string(), "pt-BR");
    }

    #[test]
    fn test_unicode_case_mapping() {
        let en = Locale::parse("en").unwrap();
        assert_eq!(en.to_lowercase("ISTANBUL"), "istanbul");
        assert_eq!(en.to_uppercase("istanbul"), "ISTANBUL");
        assert_eq!(en.to_lowercase("ΟΔΟΣ"), "οδος");
    }

    #[test]
    fn test_turkic_case_mapping() {
        for tag in ["tr", "tr-TR", "az"] {
            let locale = Locale::parse(tag).unwrap();
            assert_eq!(locale.to_lowercase("ISTANBUL"), "ıstanbul");
            assert_eq!(locale.to_lowercase("İZMİR"), "izmir");
            assert_eq!(locale.to_uppercase("izmir"), "İZMİR");
            assert_eq!(locale.to_uppercase("ılık"), "ILIK");
        }
    }

    #[test]
    fn test_titlecase_digraphs() {
        let locale = Locale::invariant();
        let mut out = String::new();
        locale.push_titlecase('ǆ', &mut out);
        locale.push_titlecase('ǉ', &mut out);
        locale.push_titlecase('a', &mut out);
        assert_eq!(out, "ǅǈA");
    }

    #[test]
    fn test_uppercase_is_one_to_one() {
        let locale = Locale::invariant();
        let mut out = String::new();
        for ch in ['ß', 'ŉ', 'a', 'é'] {
            locale.push_uppercase(ch, &mut out);
        }
        assert_eq!(out, "ßŉAÉ");
    }
}
