//! Presence guards
//!
//! Absent (`None`), empty and whitespace-only text are three distinct inputs.
//! Every other operation starts with one of these two checks.

/// True when the text is absent or has no characters
#[inline]
pub fn is_absent_or_empty(text: Option<&str>) -> bool {
    text.map_or(true, str::is_empty)
}

/// True when the text is absent, empty, or made only of whitespace
///
/// Whitespace is anything `char::is_whitespace` accepts, including tabs,
/// newlines, carriage returns and the Unicode space separators.
#[inline]
pub fn is_absent_or_blank(text: Option<&str>) -> bool {
    text.map_or(true, |s| s.chars().all(char::is_whitespace))
}
