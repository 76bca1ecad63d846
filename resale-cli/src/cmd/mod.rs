//! Command-line surface: argument definitions and shared helpers.

pub mod buyer;
pub mod cities;
pub mod export;
pub mod records;
pub mod seller;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use resale_core::CityPolicy;
use resale_data::{CityPolicyLoader, builtin_cities, merge_policies};
use resale_store::{LastState, StateStore};
use rust_decimal::Decimal;

/// Transaction cost calculator for second-hand residential sales.
///
/// Computes seller- and buyer-side taxes, fees and net figures under a
/// simplified, city-parameterized policy model. For reference only.
#[derive(Debug, Parser)]
#[command(name = "resale", version, about)]
pub struct Cli {
    /// Directory holding the persisted state blobs.
    #[arg(long, default_value = ".resale", global = true)]
    pub state_dir: PathBuf,

    /// City policy preset applied before the other flags.
    #[arg(long, global = true)]
    pub city: Option<String>,

    /// Halve the VAT surcharge (city concession).
    #[arg(long, global = true)]
    pub surcharge_discount: bool,

    /// Extra city policy CSV merged over the builtin presets.
    #[arg(long, global = true)]
    pub cities_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the seller-side breakdown.
    Seller(seller::SellerCmd),
    /// Compute the buyer-side breakdown.
    Buyer(buyer::BuyerCmd),
    /// List the available city policy presets.
    Cities,
    /// Manage named saved records.
    Records {
        #[command(subcommand)]
        action: records::RecordsAction,
    },
    /// Export the saved state as a formatted report.
    Export(export::ExportCmd),
}

pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Seller(cmd) => seller::run(&cli, cmd),
        Command::Buyer(cmd) => buyer::run(&cli, cmd),
        Command::Cities => cities::run(&cli),
        Command::Records { action } => records::run(&cli, action),
        Command::Export(cmd) => export::run(&cli, cmd),
    }
}

/// Parses a money flag through the amount parser, so grouped digits and the
/// informal 万/千 suffixes are accepted.
pub fn parse_money(s: &str) -> Result<Decimal, String> {
    Ok(resale_core::amount::parse_amount(s))
}

/// The effective policy set: builtins, optionally overlaid with a CSV file.
pub fn load_policies(cities_file: Option<&Path>) -> Result<Vec<CityPolicy>> {
    let builtin = builtin_cities();
    match cities_file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open city policy file '{}'", path.display()))?;
            let extra = CityPolicyLoader::parse(file)
                .with_context(|| format!("cannot parse city policy file '{}'", path.display()))?;
            Ok(merge_policies(builtin, extra))
        }
        None => Ok(builtin.to_vec()),
    }
}

/// Finds a policy by name, falling back to the baseline entry.
pub fn policy_by_name<'a>(
    policies: &'a [CityPolicy],
    name: &str,
) -> &'a CityPolicy {
    policies
        .iter()
        .find(|city| city.name == name)
        .unwrap_or(&policies[0])
}

/// Opens the store and loads the last state, or a default one.
pub fn load_state(cli: &Cli) -> Result<(StateStore, LastState)> {
    let store = StateStore::open(&cli.state_dir)?;
    let state = store.load_last_state()?.unwrap_or_default();
    Ok((store, state))
}

/// Applies the `--city` / `--surcharge-discount` selection to the state,
/// overwriting the policy-derived seller fields the way the city picker does.
pub fn apply_city_selection(
    cli: &Cli,
    state: &mut LastState,
) -> Result<()> {
    if cli.city.is_none() && !cli.surcharge_discount {
        return Ok(());
    }

    let policies = load_policies(cli.cities_file.as_deref())?;
    let name = cli.city.as_deref().unwrap_or(state.city_name.as_str());
    let policy = policy_by_name(&policies, name).clone();

    state.city_name = policy.name.clone();
    state.surcharge_discount = cli.surcharge_discount;
    policy.apply_to_seller(&mut state.seller_input, cli.surcharge_discount);

    Ok(())
}
