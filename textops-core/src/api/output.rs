//! Summary record produced by [`TextOps::analyze`](crate::api::TextOps::analyze)

use serde::{Deserialize, Serialize};

/// Measurements of a single text value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Characters in the raw text
    pub characters: usize,
    /// Characters in the clean text
    pub clean_characters: usize,
    /// Space-separated words after cleaning
    pub words: usize,
    /// Whether the text is entirely `[a-zA-Z0-9]`
    pub is_alphanumeric: bool,
    /// Initials of each word; `None` for absent or blank text
    pub abbreviation: Option<String>,
}
