//! Quote store
//!
//! The `QuoteStore` owns the quotes read from the data file and answers
//! every query the interface needs:
//! - distinct authors and categories (sorted)
//! - substring filters by author, category or keyword
//! - uniform random picks, over everything or over a query's matches
//! - a session-only favorites list
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = QuoteStore::open(&config.quotes_path())?;
//!
//! let quote = store.random_quote()?.clone();
//! store.add_favorite(quote);
//!
//! let query = QuoteQuery::new().author("twain").keyword("truth");
//! let matches = store.query(&query);
//! ```

use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::error::{EmptyCollectionError, LoadError, LoadResult};
use crate::models::Quote;
use crate::query::{field_matches, Field, QuoteQuery};

/// In-memory quote collection with derived indexes and session favorites
///
/// `quotes`, `authors` and `categories` are fixed at construction.
/// `favorites` only grows.
#[derive(Debug, Clone, Default)]
pub struct QuoteStore {
    /// All quotes, in file order
    quotes: Vec<Quote>,
    /// Distinct authors, sorted ascending
    authors: Vec<String>,
    /// Distinct categories, sorted ascending
    categories: Vec<String>,
    /// Favorites in the order they were added (duplicates allowed)
    favorites: Vec<Quote>,
    /// File the quotes were read from, if any
    source: Option<PathBuf>,
}

impl QuoteStore {
    /// Load quotes from a JSON file
    ///
    /// The file must hold a list of `{text, author, category}` objects.
    /// Any read or parse failure aborts the load; nothing is partially kept.
    pub fn open(path: &Path) -> LoadResult<Self> {
        debug!("Loading quotes from {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| LoadError::from_io(e, path.to_path_buf()))?;
        let quotes = parse(&content, &format!("'{}'", path.display()))?;

        let mut store = Self::from_quotes(quotes);
        store.source = Some(path.to_path_buf());
        Ok(store)
    }

    /// Load quotes from a JSON string
    pub fn from_json_str(json: &str) -> LoadResult<Self> {
        parse(json, "input").map(Self::from_quotes)
    }

    /// Load quotes from any reader producing JSON
    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let quotes: Vec<Quote> =
            serde_json::from_reader(reader).map_err(|source| LoadError::InvalidFormat {
                origin: "reader".to_string(),
                source,
            })?;
        Ok(Self::from_quotes(quotes))
    }

    /// Build a store from already-parsed quotes
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        let authors = distinct_sorted(quotes.iter().map(|q| q.author.as_str()));
        let categories = distinct_sorted(quotes.iter().map(|q| q.category.as_str()));

        info!(
            "Loaded {} quotes ({} authors, {} categories)",
            quotes.len(),
            authors.len(),
            categories.len()
        );

        Self {
            quotes,
            authors,
            categories,
            favorites: Vec::new(),
            source: None,
        }
    }

    /// All quotes in load order
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Distinct authors, sorted ascending
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Distinct categories, sorted ascending
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Path the quotes were loaded from, if loaded from a file
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of quotes
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// True when no quotes were loaded
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    // ==================== Filters ====================

    /// Quotes whose author contains `author` (case-insensitive)
    pub fn filter_by_author(&self, author: &str) -> Vec<&Quote> {
        self.filter_field(Field::Author, author)
    }

    /// Quotes whose category contains `category` (case-insensitive)
    pub fn filter_by_category(&self, category: &str) -> Vec<&Quote> {
        self.filter_field(Field::Category, category)
    }

    /// Quotes whose text contains `keyword` (case-insensitive)
    pub fn filter_by_keyword(&self, keyword: &str) -> Vec<&Quote> {
        self.filter_field(Field::Text, keyword)
    }

    /// Quotes matching every criterion of `query`, in load order
    pub fn query(&self, query: &QuoteQuery) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| query.matches(q)).collect()
    }

    fn filter_field(&self, field: Field, needle: &str) -> Vec<&Quote> {
        self.quotes
            .iter()
            .filter(|q| field_matches(q, field, needle))
            .collect()
    }

    // ==================== Random ====================

    /// Pick a quote uniformly at random
    pub fn random_quote(&self) -> Result<&Quote, EmptyCollectionError> {
        self.random_quote_with(&mut rand::rng())
    }

    /// Pick a quote uniformly at random using the given RNG
    pub fn random_quote_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<&Quote, EmptyCollectionError> {
        self.quotes.choose(rng).ok_or(EmptyCollectionError)
    }

    /// Pick a random quote among those matching `query`
    ///
    /// Returns `None` when nothing matches.
    pub fn random_match(&self, query: &QuoteQuery) -> Option<&Quote> {
        self.random_match_with(query, &mut rand::rng())
    }

    /// Pick a random quote among those matching `query` using the given RNG
    pub fn random_match_with<R: Rng + ?Sized>(
        &self,
        query: &QuoteQuery,
        rng: &mut R,
    ) -> Option<&Quote> {
        self.query(query).choose(rng).copied()
    }

    // ==================== Favorites ====================

    /// Append a quote to the session favorites
    ///
    /// No uniqueness check: favoriting the same quote twice lists it twice.
    pub fn add_favorite(&mut self, quote: Quote) {
        debug!("Adding favorite: {}", quote);
        self.favorites.push(quote);
    }

    /// Favorites in insertion order
    ///
    /// This is a read-only view; the list can only change via `add_favorite`.
    pub fn favorites(&self) -> &[Quote] {
        &self.favorites
    }
}

/// Parse a JSON list of quotes, naming `origin` in the error
fn parse(json: &str, origin: &str) -> LoadResult<Vec<Quote>> {
    serde_json::from_str(json).map_err(|source| LoadError::InvalidFormat {
        origin: origin.to_string(),
        source,
    })
}

/// Collect distinct values in ascending order
fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
