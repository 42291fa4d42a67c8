//! Author and category listing

use anyhow::Result;

use quotebook_core::QuoteStore;

use crate::output::Output;

/// List distinct authors
pub fn authors(store: &QuoteStore, output: &Output) -> Result<()> {
    output.print_names(store.authors(), "author", "authors");
    Ok(())
}

/// List distinct categories
pub fn categories(store: &QuoteStore, output: &Output) -> Result<()> {
    output.print_names(store.categories(), "category", "categories");
    Ok(())
}
