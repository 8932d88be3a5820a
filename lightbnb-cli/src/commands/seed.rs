use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use lightbnb_db::{fixtures, BookingStore};
use tracing::info;

use super::print_json;

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("files").required(true).multiple(true).args(["users", "properties"])))]
pub struct SeedArgs {
    /// JSON file of users (keyed by id, or an array)
    #[arg(long)]
    pub users: Option<PathBuf>,

    /// JSON file of properties; owner ids refer to the users file
    #[arg(long)]
    pub properties: Option<PathBuf>,
}

pub async fn run_seed<S, W>(store: &S, args: SeedArgs, out: &mut W) -> Result<()>
where
    S: BookingStore + ?Sized,
    W: Write,
{
    // Parse both files before touching the store
    let users = match &args.users {
        Some(path) => fixtures::load_users(path)?,
        None => Vec::new(),
    };
    let properties = match &args.properties {
        Some(path) => fixtures::load_properties(path)?,
        None => Vec::new(),
    };

    info!(
        users = users.len(),
        properties = properties.len(),
        "seeding fixtures"
    );
    let report = fixtures::seed(store, users, properties).await?;
    print_json(out, &report)
}
