//! Character and word counts

use crate::presence::{is_absent_or_blank, is_absent_or_empty};
use crate::transform::clean_str;

/// Number of characters in the text, or in its clean form when `clean` is set
///
/// Characters are Unicode scalar values, so `"é"` written with a combining
/// accent counts as two.
pub fn character_count(text: Option<&str>, clean: bool) -> usize {
    match text {
        Some(s) if !is_absent_or_empty(text) => {
            if clean {
                clean_str(s).chars().count()
            } else {
                s.chars().count()
            }
        }
        _ => 0,
    }
}

/// Number of space-separated words after cleaning
///
/// Clean text has single interior spaces and no spaces at the ends, so every
/// space marks exactly one boundary between two words.
pub fn word_count(text: Option<&str>) -> usize {
    match text {
        Some(s) if !is_absent_or_blank(text) => {
            1 + clean_str(s).chars().filter(|&ch| ch == ' ').count()
        }
        _ => 0,
    }
}
