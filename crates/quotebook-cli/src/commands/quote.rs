//! Quote command handlers

use anyhow::Result;
use tracing::debug;

use quotebook_core::{QuoteQuery, QuoteStore};

use crate::output::{Output, NO_QUOTES};

/// Print one random quote matching the query
///
/// An empty query picks from the whole collection.
pub fn random(store: &QuoteStore, query: QuoteQuery, output: &Output) -> Result<()> {
    debug!("Random pick with {:?}", query);

    if query.is_empty() {
        let quote = store.random_quote()?;
        output.print_quote(quote);
        return Ok(());
    }

    match store.random_match(&query) {
        Some(quote) => output.print_quote(quote),
        None => output.message(NO_QUOTES),
    }
    Ok(())
}

/// Print every quote matching the query
pub fn filter(store: &QuoteStore, query: QuoteQuery, output: &Output) -> Result<()> {
    let quotes = store.query(&query);
    debug!("Filter {:?} matched {} quote(s)", query, quotes.len());
    output.print_quotes(&quotes);
    Ok(())
}
