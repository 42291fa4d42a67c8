//! Quote filtering
//!
//! Every filter is a case-insensitive substring match on one field.
//! A `QuoteQuery` combines up to three of them (author, category, keyword).
//!
//! The three criteria look at different fields, so narrowing by author, then
//! category, then keyword selects the same quotes as testing all three at
//! once. `QuoteQuery::matches` does the latter.

use crate::models::Quote;

/// Which field a filter is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Author,
    Category,
    Text,
}

impl Field {
    fn value(self, quote: &Quote) -> &str {
        match self {
            Field::Author => &quote.author,
            Field::Category => &quote.category,
            Field::Text => &quote.text,
        }
    }
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Check whether `quote` matches `needle` on the given field
pub fn field_matches(quote: &Quote, field: Field, needle: &str) -> bool {
    contains_ignore_case(field.value(quote), needle)
}

/// Combined filter criteria
///
/// Empty or whitespace-only criteria are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteQuery {
    /// Substring of the author
    pub author: Option<String>,
    /// Substring of the category
    pub category: Option<String>,
    /// Substring of the quote text
    pub keyword: Option<String>,
}

impl QuoteQuery {
    /// Create an empty query (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the author criterion
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = normalize(author.into());
        self
    }

    /// Set the category criterion
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = normalize(category.into());
        self
    }

    /// Set the keyword criterion
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = normalize(keyword.into());
        self
    }

    /// Build a query from optional criteria (as parsed from CLI flags)
    pub fn from_parts(
        author: Option<String>,
        category: Option<String>,
        keyword: Option<String>,
    ) -> Self {
        Self {
            author: author.and_then(normalize),
            category: category.and_then(normalize),
            keyword: keyword.and_then(normalize),
        }
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.criteria().next().is_none()
    }

    /// Check whether a quote satisfies every criterion
    pub fn matches(&self, quote: &Quote) -> bool {
        self.criteria()
            .all(|(field, needle)| field_matches(quote, field, needle))
    }

    /// Active criteria in narrowing order: author, category, keyword
    fn criteria(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::Author, self.author.as_deref()),
            (Field::Category, self.category.as_deref()),
            (Field::Text, self.keyword.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, needle)| {
            needle
                .filter(|n| !n.trim().is_empty())
                .map(|n| (field, n))
        })
    }
}

fn normalize(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Quote> {
        vec![
            Quote::new("The only way out is through.", "Robert Frost", "Perseverance"),
            Quote::new("Simplicity is the soul of wit.", "Anonymous", "Humor"),
            Quote::new("Through wit we survive.", "Robert Burns", "Humor"),
        ]
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Robert Frost", "frost"));
        assert!(contains_ignore_case("Robert Frost", "ROB"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Robert Frost", "burns"));
    }

    #[test]
    fn test_field_matches() {
        let quote = Quote::new("Know thyself.", "Socrates", "Wisdom");
        assert!(field_matches(&quote, Field::Author, "socr"));
        assert!(field_matches(&quote, Field::Category, "WIS"));
        assert!(field_matches(&quote, Field::Text, "thyself"));
        assert!(!field_matches(&quote, Field::Text, "socrates"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = QuoteQuery::new();
        assert!(query.is_empty());
        assert!(sample().iter().all(|q| query.matches(q)));
    }

    #[test]
    fn test_blank_criteria_are_ignored() {
        let query = QuoteQuery::new().author("  ").keyword("");
        assert!(query.is_empty());
        assert_eq!(query.author, None);
        assert_eq!(query.keyword, None);

        let parts = QuoteQuery::from_parts(Some(String::new()), None, Some(" ".into()));
        assert!(parts.is_empty());
    }

    #[test]
    fn test_combined_criteria_are_conjunctive() {
        let query = QuoteQuery::new().author("robert").category("humor");
        let matched: Vec<_> = sample().into_iter().filter(|q| query.matches(q)).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].author, "Robert Burns");
    }

    #[test]
    fn test_sequential_narrowing_equals_conjunction() {
        let quotes = sample();
        let query = QuoteQuery::new().author("robert").keyword("through");

        let conjunctive: Vec<_> = quotes.iter().filter(|q| query.matches(q)).collect();

        let by_author: Vec<_> = quotes
            .iter()
            .filter(|q| field_matches(q, Field::Author, "robert"))
            .collect();
        let narrowed: Vec<_> = by_author
            .into_iter()
            .filter(|q| field_matches(q, Field::Text, "through"))
            .collect();

        assert_eq!(conjunctive, narrowed);
        assert_eq!(conjunctive.len(), 2);
    }
}
