//! Configuration resolution for the CLI
//!
//! Priority order (highest to lowest):
//! 1. `--database-url` flag
//! 2. Environment variables (including ones loaded from .env files)
//! 3. Config file (`--config`, or ~/.lightbnb/config.toml if present)
//! 4. Built-in defaults

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::StoreConfig;
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective store config (secrets masked)
    Show,
    /// Show config file path
    Path,
}

/// Load environment variables from .env files
///
/// Checks the current directory first, then ~/.lightbnb/.env.
/// dotenvy never overwrites variables that are already set.
pub fn load_dotenv() {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
        loaded_from.push(path);
    }

    let home_env = StoreConfig::config_path().with_file_name(".env");
    if home_env.exists() {
        match dotenvy::from_path(&home_env) {
            Ok(()) => loaded_from.push(home_env),
            Err(e) => debug!("Failed to load {}: {}", home_env.display(), e),
        }
    }

    if loaded_from.is_empty() {
        debug!("No .env files found (current dir or ~/.lightbnb)");
    } else {
        let joined: Vec<_> = loaded_from.iter().map(|p| p.display().to_string()).collect();
        info!("Loaded environment from: {}", joined.join(", "));
    }
}

/// Resolve the store config from file, environment and flag.
pub fn resolve(config_path: Option<&Path>, database_url: Option<&str>) -> Result<StoreConfig> {
    let config = StoreConfig::load(config_path).context("Failed to load store configuration")?;

    Ok(match database_url {
        Some(url) => config.with_database_url(url),
        None => config,
    })
}

pub fn run_config<W: Write>(args: ConfigArgs, config: &StoreConfig, out: &mut W) -> Result<()> {
    match args.command {
        ConfigCommands::Show => {
            let rendered = config.to_redacted_toml()?;
            write!(out, "{}", rendered)?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", StoreConfig::config_path().display())?;
        }
    }
    Ok(())
}
