//! Text normalization and analysis helpers for single strings
//!
//! Every operation is a pure function over an optional string slice: `None`
//! stands for absent text, which is kept distinct from empty and
//! whitespace-only text. Operations never modify their input; transforms
//! return `Option<Cow<str>>`, borrowing the input whenever it is echoed back
//! unchanged.
//!
//! # Characters
//!
//! A "character" is a Unicode scalar value (`char`). Reversal and counting
//! work on scalar values, so a character outside the Basic Multilingual Plane
//! counts once, while a combining mark counts as its own character. Nothing
//! here works on grapheme clusters.
//!
//! # Layout
//!
//! - [`presence`]: absent/empty/blank guards used by every other module
//! - [`classify`]: ASCII alphanumeric check
//! - [`transform`]: reversal and whitespace normalization
//! - [`casing`]: locale-aware word and sentence casing
//! - [`measure`]: character and word counts
//! - [`abbreviation`]: initials of each word
//! - [`api`]: configured [`TextOps`] facade
//!
//! # Example
//!
//! ```rust
//! use textops_core::{clean, to_abbreviation, word_count};
//!
//! let text = Some("  united \t nations\n");
//! assert_eq!(clean(text).as_deref(), Some("united nations"));
//! assert_eq!(word_count(text), 2);
//! assert_eq!(to_abbreviation(text).as_deref(), Some("UN"));
//! ```

pub mod abbreviation;
pub mod api;
pub mod casing;
pub mod classify;
pub mod error;
pub mod measure;
pub mod presence;
pub mod transform;

pub use abbreviation::{to_abbreviation, to_abbreviation_with};
pub use api::{Config, ConfigBuilder, TextOps, TextStats};
pub use casing::{
    capitalize_each_word, capitalize_each_word_with, to_sentence_case, to_sentence_case_with,
    Locale,
};
pub use classify::is_alphanumeric;
pub use error::{Error, Result};
pub use measure::{character_count, word_count};
pub use presence::{is_absent_or_blank, is_absent_or_empty};
pub use transform::{clean, collapse_whitespace, newlines_to_spaces, reverse, tabs_to_spaces};
