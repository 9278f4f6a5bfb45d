//! Structural transforms: reversal and whitespace normalization
//!
//! Whitespace runs are collapsed by a single forward scan instead of a
//! pattern engine. A run is any maximal sequence of characters accepted by
//! `char::is_whitespace`; each interior run becomes one ASCII space and runs
//! at either end are dropped.
//!
//! Tabs and newlines are already whitespace, so the distinction between
//! [`tabs_to_spaces`], [`newlines_to_spaces`], [`clean`] and
//! [`collapse_whitespace`] is nominal: all four run the same scan and give
//! the same result.

use std::borrow::Cow;

use crate::presence::is_absent_or_empty;

/// Reverse the characters of the text
///
/// Works on Unicode scalar values: a combining mark is moved independently
/// of the base character it follows.
pub fn reverse(text: Option<&str>) -> Option<Cow<'_, str>> {
    let s = text?;
    if is_absent_or_empty(text) {
        return Some(Cow::Borrowed(s));
    }
    Some(Cow::Owned(s.chars().rev().collect()))
}

/// Collapse every whitespace run to a single space and trim both ends
pub fn collapse_whitespace(text: Option<&str>) -> Option<Cow<'_, str>> {
    text.map(normalize)
}

/// Turn tabs into spaces, then collapse whitespace
pub fn tabs_to_spaces(text: Option<&str>) -> Option<Cow<'_, str>> {
    text.map(normalize)
}

/// Turn newlines into spaces, then collapse whitespace
pub fn newlines_to_spaces(text: Option<&str>) -> Option<Cow<'_, str>> {
    text.map(normalize)
}

/// Produce clean text: no tabs, no newlines, single spaces, trimmed
pub fn clean(text: Option<&str>) -> Option<Cow<'_, str>> {
    text.map(clean_str)
}

/// [`clean`] for text already known to be present
pub(crate) fn clean_str(s: &str) -> Cow<'_, str> {
    normalize(s)
}

fn normalize(s: &str) -> Cow<'_, str> {
    if s.is_empty() || is_collapsed(s) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(collapse(s))
}

/// Single pass: a space is only emitted once a later non-whitespace
/// character shows the run was interior.
fn collapse(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_space = false;

    for ch in s.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }

    out
}

/// Already in collapsed form: only single ASCII spaces between other
/// characters, none at the ends.
fn is_collapsed(s: &str) -> bool {
    let mut prev_space = true;
    for ch in s.chars() {
        if ch == ' ' {
            if prev_space {
                return false;
            }
            prev_space = true;
        } else if ch.is_whitespace() {
            return false;
        } else {
            prev_space = false;
        }
    }
    !prev_space
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(Some("abc")).as_deref(), Some("cba"));
        assert_eq!(reverse(Some("a b")).as_deref(), Some("b a"));
        assert_eq!(reverse(Some("日本語")).as_deref(), Some("語本日"));
        assert_eq!(reverse(Some("")).as_deref(), Some(""));
        assert_eq!(reverse(None), None);
    }

    #[test]
    fn test_reverse_works_on_scalar_values() {
        // e + COMBINING ACUTE ACCENT: the mark ends up in front of the 'e'
        assert_eq!(reverse(Some("e\u{0301}x")).as_deref(), Some("x\u{0301}e"));
        // Astral characters stay intact
        assert_eq!(reverse(Some("a😀b")).as_deref(), Some("b😀a"));
    }

    #[test]
    fn test_collapse_whitespace() {
        let mixed = collapse_whitespace(Some("  a   b\tc  "));
        assert_eq!(mixed.as_deref(), Some("a b c"));
        let crlf = collapse_whitespace(Some("one\r\n\r\ntwo"));
        assert_eq!(crlf.as_deref(), Some("one two"));
        assert_eq!(collapse_whitespace(Some("   ")).as_deref(), Some(""));
        assert_eq!(collapse_whitespace(Some("")).as_deref(), Some(""));
        assert_eq!(collapse_whitespace(None), None);
    }

    #[test]
    fn test_collapse_borrows_when_already_collapsed() {
        assert!(matches!(
            collapse_whitespace(Some("a b c")),
            Some(Cow::Borrowed("a b c"))
        ));
        assert!(matches!(
            collapse_whitespace(Some("a  b")),
            Some(Cow::Owned(_))
        ));
        assert!(matches!(clean(Some(" a")), Some(Cow::Owned(_))));
        assert!(matches!(clean(Some("a\tb")), Some(Cow::Owned(_))));
    }

    #[test]
    fn test_tabs_and_newlines() {
        assert_eq!(tabs_to_spaces(Some("a\t\tb")).as_deref(), Some("a b"));
        assert_eq!(newlines_to_spaces(Some("a\n\nb\n")).as_deref(), Some("a b"));
        assert_eq!(tabs_to_spaces(Some("")).as_deref(), Some(""));
        assert_eq!(newlines_to_spaces(None), None);
    }

    #[test]
    fn test_clean() {
        assert_eq!(clean(Some("  a   b\tc  ")).as_deref(), Some("a b c"));
        let lines = clean(Some("\tline one\nline two\n"));
        assert_eq!(lines.as_deref(), Some("line one line two"));
        assert_eq!(clean(Some("\u{3000}wide\u{3000}")).as_deref(), Some("wide"));
        assert_eq!(clean(Some("")).as_deref(), Some(""));
        assert_eq!(clean(None), None);
    }

    #[test]
    fn test_tab_and_newline_variants_match_collapse() {
        for text in ["a\tb", "a\nb", " a \t\n b ", "\u{2028}x\u{00A0}y"] {
            let collapsed = collapse_whitespace(Some(text));
            assert_eq!(tabs_to_spaces(Some(text)), collapsed);
            assert_eq!(newlines_to_spaces(Some(text)), collapsed);
            assert_eq!(clean(Some(text)), collapsed);
        }
    }

    #[test]
    fn test_is_collapsed() {
        assert!(is_collapsed("a"));
        assert!(is_collapsed("a b"));
        assert!(!is_collapsed(""));
        assert!(!is_collapsed(" a"));
        assert!(!is_collapsed("a "));
        assert!(!is_collapsed("a\tb"));
    }
}
