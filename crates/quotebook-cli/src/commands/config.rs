//! Config command handlers

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use quotebook_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(config_path: Option<&PathBuf>, output: &Output) -> Result<()> {
    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "quotes_file": config.quotes_path(),
                    "log_file": config.log_path()
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.quotes_path().display());
        }
        OutputFormat::Human => {
            let effective_path = config_path
                .cloned()
                .unwrap_or_else(Config::config_file_path);
            println!("Configuration:");
            println!("  data_dir:    {}", config.data_dir.display());
            println!(
                "  quotes_file: {}{}",
                config.quotes_path().display(),
                if config.quotes_file.is_none() {
                    " (default)"
                } else {
                    ""
                }
            );
            println!(
                "  log_file:    {}{}",
                config.log_path().display(),
                if config.log_file.is_none() {
                    " (default)"
                } else {
                    ""
                }
            );
            println!();
            println!("Config file: {}", effective_path.display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(
    key: String,
    value: String,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    let mut config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;

    match key.as_str() {
        "data_dir" => {
            config.data_dir = value.clone().into();
        }
        "quotes_file" => {
            config.quotes_file = optional_path(&value);
        }
        "log_file" => {
            config.log_file = optional_path(&value);
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, quotes_file, log_file",
                key
            );
        }
    }

    // Save to the CLI-specified path or default
    let save_path = config_path
        .cloned()
        .unwrap_or_else(Config::config_file_path);
    config
        .save_to_path(&save_path)
        .context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

/// "" and "none" reset a path setting to its default
fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() || value == "none" {
        None
    } else {
        Some(PathBuf::from(value))
    }
}
