//! Quotebook CLI
//!
//! Command-line interface for Quotebook - browse, filter and collect quotes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use quotebook_core::{Config, QuoteQuery, QuoteStore};

mod commands;
mod logging;
mod output;
mod tui;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "quotebook")]
#[command(about = "Quotebook - browse, filter and collect quotes")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use a specific config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Read quotes from this file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    quotes: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI interface
    Tui,
    /// Show a random quote (optionally matching filters)
    Random(CriteriaArgs),
    /// List every quote matching the filters
    #[command(alias = "ls")]
    Filter(CriteriaArgs),
    /// List all authors
    Authors,
    /// List all categories
    Categories,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

/// Filter criteria (case-insensitive substrings)
#[derive(Args, Debug, Clone, Default)]
struct CriteriaArgs {
    /// Author contains
    #[arg(short, long)]
    author: Option<String>,
    /// Category contains
    #[arg(short, long)]
    category: Option<String>,
    /// Quote text contains
    #[arg(short, long)]
    keyword: Option<String>,
}

impl From<CriteriaArgs> for QuoteQuery {
    fn from(args: CriteriaArgs) -> Self {
        QuoteQuery::from_parts(args.author, args.category, args.keyword)
    }
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, quotes_file, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the quotes loaded
    if let Some(Commands::Config { command }) = &cli.command {
        logging::init_cli_logging();
        return handle_config_command(command.clone(), cli.config.as_ref(), &output);
    }

    let config = Config::load_with_cli_override(cli.config.as_ref())
        .context("Failed to load configuration")?;
    let quotes_path = cli.quotes.clone().unwrap_or_else(|| config.quotes_path());

    // Handle TUI (default when no command given)
    let Some(command) = cli.command else {
        return tui::run(&config, &quotes_path);
    };

    if matches!(command, Commands::Tui) {
        return tui::run(&config, &quotes_path);
    }

    logging::init_cli_logging();
    let store = load_store(&quotes_path)?;

    match command {
        Commands::Random(criteria) => commands::quote::random(&store, criteria.into(), &output),
        Commands::Filter(criteria) => commands::quote::filter(&store, criteria.into(), &output),
        Commands::Authors => commands::list::authors(&store, &output),
        Commands::Categories => commands::list::categories(&store, &output),
        Commands::Tui | Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}

/// Load the quote store, attaching a recovery hint to load failures
fn load_store(path: &Path) -> Result<QuoteStore> {
    QuoteStore::open(path).map_err(|e| match e.recovery_suggestion() {
        Some(hint) => anyhow::Error::new(e).context(hint),
        None => anyhow::Error::new(e),
    })
}
