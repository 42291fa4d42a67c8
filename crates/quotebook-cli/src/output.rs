//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use quotebook_core::Quote;
use serde::Serialize;

/// Message shown when a query has no matches
pub const NO_QUOTES: &str = "No quotes found.";

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single quote
    pub fn print_quote(&self, quote: &Quote) {
        match self.format {
            OutputFormat::Human => {
                println!("{}", quote.display_block());
                println!();
                println!("[{}]", quote.category);
            }
            OutputFormat::Json => {
                println!("{}", to_json(quote));
            }
            OutputFormat::Quiet => {
                println!("{}", quote.text);
            }
        }
    }

    /// Print a list of quotes
    pub fn print_quotes(&self, quotes: &[&Quote]) {
        match self.format {
            OutputFormat::Human => {
                if quotes.is_empty() {
                    println!("{}", NO_QUOTES);
                    return;
                }
                for quote in quotes {
                    println!("{}", quote.display_compact());
                    println!();
                }
                println!("{} quote(s)", quotes.len());
            }
            OutputFormat::Json => {
                println!("{}", to_json(&quotes));
            }
            OutputFormat::Quiet => {
                for quote in quotes {
                    println!("{}", quote.text);
                }
            }
        }
    }

    /// Print a list of names (authors or categories)
    pub fn print_names(&self, names: &[String], singular: &str, plural: &str) {
        match self.format {
            OutputFormat::Human => {
                if names.is_empty() {
                    println!("No {} found.", plural);
                    return;
                }
                for name in names {
                    println!("{}", name);
                }
                let noun = if names.len() == 1 { singular } else { plural };
                println!("\n{} {}", names.len(), noun);
            }
            OutputFormat::Json => {
                println!("{}", to_json(&names));
            }
            OutputFormat::Quiet => {
                for name in names {
                    println!("{}", name);
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Pretty JSON for a serializable value
fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
