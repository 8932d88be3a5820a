//! lightbnb CLI - LightBnB data access from the command line
//!
//! Thin wrapper over `lightbnb-db`:
//! - User lookup and registration (`user` subcommand)
//! - Guest reservation history (`reservations` subcommand)
//! - Filtered property search and listing creation (`properties` subcommand)
//! - JSON fixture seeding (`seed` subcommand)
//!
//! Results are printed to stdout as JSON; logs go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lightbnb_db::Store;
use tracing::{debug, info, warn};

mod commands;
mod config;
mod tracing_setup;

use commands::{PropertiesArgs, ReservationsArgs, SeedArgs, StoreCommand, UserArgs};

#[derive(Parser, Debug)]
#[command(
    name = "lightbnb",
    author,
    version,
    about = "Query and seed the LightBnB rental database",
    long_about = "Look up users, list guest reservations and search properties in a LightBnB \
                  Postgres database. Connection settings come from ~/.lightbnb/config.toml, \
                  .env files, LIGHTBNB_DB_* variables or DATABASE_URL."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (defaults to ~/.lightbnb/config.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Postgres connection URL, overrides every other source
    #[arg(long, global = true, value_name = "URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up or register users
    User(UserArgs),
    /// List a guest's reservations, earliest first
    Reservations(ReservationsArgs),
    /// Search or add properties
    Properties(PropertiesArgs),
    /// Load users and properties from JSON fixtures
    Seed(SeedArgs),
    /// Inspect the effective connection settings
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    config::load_dotenv();

    let command = match cli.command {
        Commands::Completions(args) => return run_completions(args),
        Commands::Config(args) => {
            let store_config =
                config::resolve(cli.config.as_deref(), cli.database_url.as_deref())?;
            return config::run_config(args, &store_config, &mut io::stdout().lock());
        }
        Commands::User(args) => StoreCommand::User(args),
        Commands::Reservations(args) => StoreCommand::Reservations(args),
        Commands::Properties(args) => StoreCommand::Properties(args),
        Commands::Seed(args) => StoreCommand::Seed(args),
    };

    let store_config = config::resolve(cli.config.as_deref(), cli.database_url.as_deref())?;
    debug!(config = ?store_config, "resolved store config");

    let store = Store::connect(&store_config)
        .await
        .context("Failed to connect to the LightBnB database")?;
    info!("Connected to database");

    let mut buffer = Vec::new();
    let result = tokio::select! {
        result = commands::run(&store, command, &mut buffer) => result,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted, closing connections");
            Err(anyhow!("interrupted"))
        }
    };

    store.close().await;

    result?;
    io::stdout().lock().write_all(&buffer)?;
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
