//! Locale-aware word and sentence casing
//!
//! Functions without the `_with` suffix use [`Locale::current`], the process
//! default (invariant unless [`Locale::install_default`] was called). The
//! `_with` variants take the locale explicitly and touch no shared state.

mod locale;

use std::borrow::Cow;

use crate::presence::{is_absent_or_blank, is_absent_or_empty};
use crate::transform::clean_str;

pub use locale::Locale;

/// Capitalize each word using the process default locale
pub fn capitalize_each_word(text: Option<&str>) -> Option<Cow<'_, str>> {
    capitalize_each_word_with(text, Locale::current())
}

/// Lower-case the text, then title-case the first letter of every word
///
/// A word starts at the first letter after a word separator and runs up to
/// the next separator. Separators are whitespace, control characters and
/// punctuation other than the apostrophe, so `"hello-world"` gives
/// `"Hello-World"`, `"e.g."` gives `"E.G."` and `"don't"` stays one word.
/// Digits neither start nor end a word: `"1st"` gives `"1St"`.
pub fn capitalize_each_word_with<'a>(
    text: Option<&'a str>,
    locale: &Locale,
) -> Option<Cow<'a, str>> {
    let s = text?;
    if is_absent_or_empty(text) {
        return Some(Cow::Borrowed(s));
    }

    let lowered = locale.to_lowercase(s);
    let mut out = String::with_capacity(lowered.len());
    let mut in_word = false;

    for ch in lowered.chars() {
        if in_word {
            in_word = !is_word_separator(ch);
            out.push(ch);
        } else if ch.is_alphabetic() {
            locale.push_titlecase(ch, &mut out);
            in_word = true;
        } else {
            out.push(ch);
        }
    }

    Some(Cow::Owned(out))
}

/// Characters that end a word for title casing
fn is_word_separator(ch: char) -> bool {
    match ch {
        '\'' | '\u{2019}' => false,
        '\u{2010}'..='\u{2015}' | '\u{2018}' | '\u{201A}'..='\u{201F}' => true,
        '\u{00A1}' | '\u{00AB}' | '\u{00BB}' | '\u{00BF}' | '\u{2026}' => true,
        _ => ch.is_whitespace() || ch.is_control() || ch.is_ascii_punctuation(),
    }
}

/// Sentence-case the text using the process default locale
pub fn to_sentence_case(text: Option<&str>, separator: char) -> Option<Cow<'_, str>> {
    to_sentence_case_with(text, separator, Locale::current())
}

/// Rebuild the text as sentences split on `separator`
///
/// The text is cleaned first. Without any separator the whole text is
/// lower-cased with an upper-case first character. Otherwise each non-blank
/// piece between separators is trimmed, lower-cased, given an upper-case
/// first character and followed by `separator` and a space; blank pieces
/// (including the one after a trailing separator) are dropped. The result is
/// trimmed at the end.
pub fn to_sentence_case_with<'a>(
    text: Option<&'a str>,
    separator: char,
    locale: &Locale,
) -> Option<Cow<'a, str>> {
    let s = text?;
    if is_absent_or_blank(text) {
        return Some(Cow::Borrowed(s));
    }

    let cleaned = clean_str(s.trim());
    if cleaned.is_empty() {
        return Some(cleaned);
    }

    if !cleaned.contains(separator) {
        let lowered = locale.to_lowercase(&cleaned);
        return Some(Cow::Owned(upper_first(&lowered, locale)));
    }

    let mut buffer = String::with_capacity(cleaned.len() + 8);
    for sentence in cleaned.split(separator) {
        let current = locale.to_lowercase(sentence.trim());
        if is_absent_or_blank(Some(current.as_str())) {
            continue;
        }
        buffer.push_str(&upper_first(&current, locale));
        buffer.push(separator);
        buffer.push(' ');
    }

    let len = buffer.trim_end().len();
    buffer.truncate(len);
    Some(Cow::Owned(buffer))
}

/// Upper-case the first character, keep the rest as is
fn upper_first(text: &str, locale: &Locale) -> String {
    let mut chars = text.chars();
    let mut out = String::with_capacity(text.len());
    if let Some(first) = chars.next() {
        locale.push_uppercase(first, &mut out);
    }
    out.push_str(chars.as_str());
    out
}
