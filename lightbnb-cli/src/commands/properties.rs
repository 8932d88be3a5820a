//! Property search and listing creation

use std::io::Write;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use lightbnb_db::{
    BookingStore, NewProperty, NewPropertyParams, PropertySearch, PropertySearchParams,
    DEFAULT_LIMIT,
};

use super::print_json;

#[derive(Parser, Debug)]
pub struct PropertiesArgs {
    #[command(subcommand)]
    pub command: PropertiesCommand,
}

#[derive(Subcommand, Debug)]
pub enum PropertiesCommand {
    /// Search listings, cheapest first
    Search(SearchArgs),
    /// Create a listing from a JSON file
    Add(AddPropertyArgs),
}

#[derive(Parser, Debug, Default)]
pub struct SearchArgs {
    /// Substring of the city name (case-sensitive)
    #[arg(long)]
    pub city: Option<String>,

    /// Only listings owned by this user id
    #[arg(long)]
    pub owner: Option<i32>,

    /// Minimum nightly price in whole currency units
    #[arg(long, requires = "max_price")]
    pub min_price: Option<i32>,

    /// Maximum nightly price in whole currency units
    #[arg(long, requires = "min_price")]
    pub max_price: Option<i32>,

    /// Minimum average review rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Maximum number of results
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: i64,
}

impl SearchArgs {
    fn to_search(&self) -> Result<PropertySearch> {
        let params = PropertySearchParams {
            city: self.city.clone(),
            owner_id: self.owner,
            minimum_price_per_night: self.min_price,
            maximum_price_per_night: self.max_price,
            minimum_rating: self.min_rating,
        };
        PropertySearch::try_from(params).context("Invalid search")
    }
}

#[derive(Parser, Debug)]
pub struct AddPropertyArgs {
    /// Path to a JSON listing (`cost_per_night` in minor units)
    #[arg(long)]
    pub file: PathBuf,

    /// Override the listing's owner
    #[arg(long)]
    pub owner: Option<i32>,
}

pub async fn run_properties<S, W>(store: &S, args: PropertiesArgs, out: &mut W) -> Result<()>
where
    S: BookingStore + ?Sized,
    W: Write,
{
    match args.command {
        PropertiesCommand::Search(args) => {
            ensure!(args.limit >= 0, "--limit must not be negative");
            let search = args.to_search()?;
            let properties = store.get_all_properties(&search, args.limit).await?;
            print_json(out, &properties)
        }
        PropertiesCommand::Add(args) => {
            let content = std::fs::read_to_string(&args.file)
                .with_context(|| format!("Failed to read {}", args.file.display()))?;
            let params: NewPropertyParams = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", args.file.display()))?;

            let mut property = NewProperty::new(params).context("Invalid property")?;
            if let Some(owner) = args.owner {
                property = property.with_owner(owner);
            }

            let created = store.add_property(property).await?;
            print_json(out, &created)
        }
    }
}
