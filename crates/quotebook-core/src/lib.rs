//! Quotebook Core Library
//!
//! This crate provides the core functionality for Quotebook, a small
//! quote browser: quotes are read once from a JSON file, then filtered,
//! picked at random and collected into a session favorites list.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = QuoteStore::open(Path::new("quotes.json"))?;
//!
//! // Pick one
//! let quote = store.random_quote()?.clone();
//! println!("{}", quote.display_block());
//!
//! // Filter
//! let wit = store.query(&QuoteQuery::new().author("wilde").category("wit"));
//!
//! // Favorites last for the session only
//! store.add_favorite(quote);
//! ```
//!
//! # Modules
//!
//! - `store`: The quote store (main entry point)
//! - `query`: Case-insensitive filter criteria
//! - `models`: The `Quote` record
//! - `error`: Load and query errors
//! - `config`: Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod store;

pub use config::Config;
pub use error::{EmptyCollectionError, LoadError, LoadResult};
pub use models::Quote;
pub use query::QuoteQuery;
pub use store::QuoteStore;
