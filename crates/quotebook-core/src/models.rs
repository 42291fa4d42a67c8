//! Data models for Quotebook
//!
//! Defines the core data structure: Quote.
//! Quotes are read once from the data file and never change afterwards.

use serde::{Deserialize, Serialize};

/// An attributed quote with a category tag
///
/// Two quotes are equal when all three fields match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Quote {
    /// The quoted text
    pub text: String,
    /// Who said or wrote it
    pub author: String,
    /// Free-form category (e.g. "Wisdom", "Humor")
    pub category: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            category: category.into(),
        }
    }

    /// Format for the single-quote view: text, blank line, attribution
    pub fn display_block(&self) -> String {
        format!("\"{}\"\n\n- {}", self.text, self.author)
    }

    /// Format for list views: text with the attribution directly below
    pub fn display_compact(&self) -> String {
        format!("\"{}\"\n- {}", self.text, self.author)
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.author)
    }
}
