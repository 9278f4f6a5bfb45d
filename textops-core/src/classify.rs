//! Character-set classification

use crate::presence::is_absent_or_empty;

/// True when the text is non-empty and every character is `[a-zA-Z0-9]`
///
/// Only ASCII letters and digits qualify; accented letters and non-ASCII
/// digits make the result false.
pub fn is_alphanumeric(text: Option<&str>) -> bool {
    match text {
        Some(s) if !is_absent_or_empty(text) => s.chars().all(|ch| ch.is_ascii_alphanumeric()),
        _ => false,
    }
}
