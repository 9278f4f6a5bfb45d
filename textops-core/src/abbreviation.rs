//! Initials of each word

use std::borrow::Cow;

use crate::casing::Locale;
use crate::presence::is_absent_or_blank;
use crate::transform::clean_str;

/// Abbreviate using the process default locale
pub fn to_abbreviation(text: Option<&str>) -> Option<Cow<'_, str>> {
    to_abbreviation_with(text, Locale::current())
}

/// Concatenate the upper-cased first character of every word
///
/// `"united nations"` gives `"UN"`. Blank text is returned unchanged.
///
/// # Panics
///
/// Clean text never contains an empty word. If that guarantee were broken,
/// this panics rather than skipping the word.
pub fn to_abbreviation_with<'a>(text: Option<&'a str>, locale: &Locale) -> Option<Cow<'a, str>> {
    let s = text?;
    if is_absent_or_blank(text) {
        return Some(Cow::Borrowed(s));
    }

    let cleaned = clean_str(s);
    let mut result = String::new();
    for word in cleaned.split(' ') {
        let first = word.chars().next().expect("clean text has no empty words");
        locale.push_uppercase(first, &mut result);
    }

    Some(Cow::Owned(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abbreviate(text: &str) -> String {
        abbreviate_in(text, &Locale::invariant())
    }

    fn abbreviate_in(text: &str, locale: &Locale) -> String {
        to_abbreviation_with(Some(text), locale)
            .map(Cow::into_owned)
            .unwrap_or_default()
    }

    #[test]
    fn test_abbreviation() {
        assert_eq!(abbreviate("united nations"), "UN");
        assert_eq!(abbreviate("  portable\tnetwork \n graphics "), "PNG");
        assert_eq!(abbreviate("as soon as possible"), "ASAP");
        assert_eq!(abbreviate("x"), "X");
    }

    #[test]
    fn test_abbreviation_keeps_non_letters() {
        assert_eq!(abbreviate("3 little pigs"), "3LP");
    }

    #[test]
    fn test_abbreviation_maps_one_char_per_word() {
        // Upper-casing ß would give "SS"; each word contributes one character
        assert_eq!(abbreviate("ßtraße eins"), "ßE");
    }

    #[test]
    fn test_abbreviation_turkish_dotted_i() {
        let tr = Locale::parse("tr").unwrap();
        assert_eq!(abbreviate_in("iş ilanı", &tr), "İİ");
    }

    #[test]
    fn test_abbreviation_guards() {
        let locale = Locale::invariant();
        assert_eq!(to_abbreviation_with(None, &locale), None);
        assert_eq!(abbreviate(""), "");
        assert_eq!(abbreviate("  \t"), "  \t");

        let acronym = to_abbreviation(Some("world wide web"));
        assert_eq!(acronym.as_deref(), Some("WWW"));
    }
}
