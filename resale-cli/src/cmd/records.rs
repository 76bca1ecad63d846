use anyhow::{Context, Result};
use chrono::Utc;
use clap::Subcommand;
use resale_core::{calc_buyer, calc_seller};
use resale_data::DEFAULT_CITY_NAME;
use resale_store::{SavedRecord, StateStore};
use tracing::{info, warn};

use crate::cmd::Cli;
use crate::report;

#[derive(Debug, Subcommand)]
pub enum RecordsAction {
    /// List the saved records.
    List,
    /// Save the current last state under a name.
    Save { name: String },
    /// Print the summaries of a named record.
    Show { name: String },
    /// Delete a named record.
    Remove { name: String },
}

pub fn run(
    cli: &Cli,
    action: &RecordsAction,
) -> Result<()> {
    let store = StateStore::open(&cli.state_dir)?;

    match action {
        RecordsAction::List => {
            let records = store.load_records()?;
            if records.records.is_empty() {
                println!("no saved records");
            }
            for record in &records.records {
                let city = if record.state.city_name.is_empty() {
                    DEFAULT_CITY_NAME
                } else {
                    record.state.city_name.as_str()
                };
                println!(
                    "{}  (saved {}, city {}, sale price {})",
                    record.name,
                    record.saved_at.format("%Y-%m-%d %H:%M"),
                    city,
                    resale_core::amount::format_currency(record.state.seller_input.sale_price),
                );
            }
        }
        RecordsAction::Save { name } => {
            let state = store
                .load_last_state()?
                .context("no last state to save; run `resale seller --save` first")?;
            store.upsert_record(SavedRecord {
                name: name.clone(),
                saved_at: Utc::now(),
                state,
            })?;
            info!("saved record '{name}'");
        }
        RecordsAction::Show { name } => {
            let records = store.load_records()?;
            let record = records
                .records
                .iter()
                .find(|record| record.name == *name)
                .with_context(|| format!("no saved record named '{name}'"))?;

            let seller_result = calc_seller(&record.state.seller_input);
            let buyer_result = calc_buyer(&record.state.buyer_input);
            print!(
                "{}",
                report::render_seller_summary(&record.state.seller_input, &seller_result)
            );
            print!(
                "{}",
                report::render_buyer_summary(&record.state.buyer_input, &buyer_result)
            );
        }
        RecordsAction::Remove { name } => {
            if store.remove_record(name)? {
                info!("removed record '{name}'");
            } else {
                warn!("no saved record named '{name}'");
            }
        }
    }

    Ok(())
}
