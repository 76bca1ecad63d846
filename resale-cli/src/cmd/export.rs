use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Args;
use resale_core::{
    BuyerDraft, SellerDraft, calc_buyer, calc_seller, validate_buyer_input, validate_seller_input,
};
use resale_store::StateStore;
use tracing::{info, warn};

use crate::cmd::{Cli, load_policies, policy_by_name};
use crate::report;

/// Render the saved state as a formatted report file.
#[derive(Debug, Args)]
pub struct ExportCmd {
    /// Output path for the text report.
    #[arg(long, default_value = "resale-report.txt")]
    pub out: PathBuf,

    /// Also write the line items as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

pub fn run(
    cli: &Cli,
    cmd: &ExportCmd,
) -> Result<()> {
    let store = StateStore::open(&cli.state_dir)?;
    let state = store
        .load_last_state()?
        .context("nothing to export; run `resale seller --save` first")?;

    // The calculators never refuse; gating exports on valid input is this
    // layer's policy.
    let seller_issues = validate_seller_input(&SellerDraft::from(&state.seller_input));
    let buyer_issues = validate_buyer_input(&BuyerDraft::from(&state.buyer_input));
    if !seller_issues.is_empty() || !buyer_issues.is_empty() {
        for issue in seller_issues.iter().chain(buyer_issues.iter()) {
            warn!("{issue}");
        }
        bail!(
            "cannot export: the saved inputs have {} issue(s)",
            seller_issues.len() + buyer_issues.len()
        );
    }
    if state.seller_input.sale_price.is_zero() {
        bail!("cannot export: the sale price is not set");
    }

    let policies = load_policies(cli.cities_file.as_deref())?;
    let city = policy_by_name(&policies, &state.city_name);

    let seller_result = calc_seller(&state.seller_input);
    let buyer_result = calc_buyer(&state.buyer_input);
    let data = report::ReportData {
        seller_input: &state.seller_input,
        buyer_input: &state.buyer_input,
        seller_result: &seller_result,
        buyer_result: &buyer_result,
        city,
        surcharge_discount: state.surcharge_discount,
        generated_at: Local::now(),
    };

    let text = report::render_report(&data);
    fs::write(&cmd.out, text)
        .with_context(|| format!("cannot write report to '{}'", cmd.out.display()))?;
    info!("report written to {}", cmd.out.display());

    if let Some(path) = &cmd.csv {
        let file = File::create(path)
            .with_context(|| format!("cannot write CSV to '{}'", path.display()))?;
        report::write_line_items_csv(&data, file)?;
        info!("line items written to {}", path.display());
    }

    Ok(())
}
