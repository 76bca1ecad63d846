use anyhow::Result;
use clap::Args;
use resale_core::{BuyerDraft, BuyerInput, calc_buyer, validate_buyer_input};
use rust_decimal::Decimal;
use tracing::warn;

use crate::cmd::{Cli, apply_city_selection, load_state, parse_money};
use crate::report;

/// Buyer-side flags. Absent flags keep the stored (or default) values.
#[derive(Debug, Args)]
pub struct BuyerCmd {
    /// Agreed contract price. Accepts grouped digits and 万/千 suffixes.
    #[arg(long, value_parser = parse_money)]
    pub sale_price: Option<Decimal>,

    /// Assessed price used as the deed-tax base (defaults to the sale price).
    #[arg(long, value_parser = parse_money)]
    pub assessed_price: Option<Decimal>,

    /// Deed-tax rate (decimal fraction), usually one of the city presets.
    #[arg(long)]
    pub deed_tax_rate: Option<Decimal>,

    /// Buyer agent fee rate (decimal fraction).
    #[arg(long)]
    pub agent_rate: Option<Decimal>,

    /// Flat loan-related costs (appraisal, guarantee fees).
    #[arg(long, value_parser = parse_money)]
    pub loan_fees: Option<Decimal>,

    /// Show the line-item breakdown table.
    #[arg(long)]
    pub breakdown: bool,

    /// Persist the resulting state as the last state.
    #[arg(long)]
    pub save: bool,
}

impl BuyerCmd {
    fn apply(&self, input: &mut BuyerInput) {
        if let Some(v) = self.sale_price {
            input.sale_price = v;
            // A new contract price resets the assessed price unless one is
            // given explicitly.
            if self.assessed_price.is_none() {
                input.assessed_price = v;
            }
        }
        if let Some(v) = self.assessed_price {
            input.assessed_price = v;
        }
        if let Some(v) = self.deed_tax_rate {
            input.deed_tax_rate = v;
        }
        if let Some(v) = self.agent_rate {
            input.buyer_agent_rate = v;
        }
        if let Some(v) = self.loan_fees {
            input.buyer_loan_fees = v;
        }
    }
}

pub fn run(
    cli: &Cli,
    cmd: &BuyerCmd,
) -> Result<()> {
    let (store, mut state) = load_state(cli)?;
    apply_city_selection(cli, &mut state)?;

    cmd.apply(&mut state.buyer_input);
    state.buyer_input = state.buyer_input.clone().normalized();

    for issue in validate_buyer_input(&BuyerDraft::from(&state.buyer_input)) {
        warn!("{issue}");
    }

    let result = calc_buyer(&state.buyer_input);
    print!(
        "{}",
        report::render_buyer_summary(&state.buyer_input, &result)
    );
    if cmd.breakdown {
        print!(
            "{}",
            report::render_buyer_breakdown(&state.buyer_input, &result)
        );
    }

    if cmd.save {
        store.save_last_state(&state)?;
    }

    Ok(())
}
