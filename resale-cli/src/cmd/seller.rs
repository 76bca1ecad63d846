use anyhow::Result;
use clap::Args;
use resale_core::{PitMode, SellerDraft, SellerInput, calc_seller, validate_seller_input};
use rust_decimal::Decimal;
use tracing::warn;

use crate::cmd::{Cli, apply_city_selection, load_state, parse_money};
use crate::report;

/// Seller-side flags. Absent flags keep the stored (or default) values.
#[derive(Debug, Args)]
pub struct SellerCmd {
    /// Agreed contract price. Accepts grouped digits and 万/千 suffixes.
    #[arg(long, value_parser = parse_money)]
    pub sale_price: Option<Decimal>,

    /// Guide price used as the VAT base (defaults to the sale price).
    #[arg(long, value_parser = parse_money)]
    pub vat_guide_price: Option<Decimal>,

    /// Total price of the original purchase.
    #[arg(long, value_parser = parse_money)]
    pub original_price: Option<Decimal>,

    /// Deed-tax rate paid on the original purchase (decimal fraction).
    #[arg(long)]
    pub original_deed_tax_rate: Option<Decimal>,

    /// Whether the property has been held at least two years.
    #[arg(long)]
    pub over_two_years: Option<bool>,

    /// Whether the property has been held at least five years.
    #[arg(long)]
    pub over_five_years: Option<bool>,

    /// Whether this is the household's only residence.
    #[arg(long)]
    pub only_home: Option<bool>,

    /// VAT rate (decimal fraction).
    #[arg(long)]
    pub vat_rate: Option<Decimal>,

    /// Surcharge factor applied to the VAT amount (decimal fraction).
    #[arg(long)]
    pub surcharge_on_vat: Option<Decimal>,

    /// Seller agent fee rate (decimal fraction).
    #[arg(long)]
    pub agent_rate: Option<Decimal>,

    /// Mortgage balance to clear before closing.
    #[arg(long, value_parser = parse_money)]
    pub remaining_loan: Option<Decimal>,

    /// Bridge financing monthly rate (decimal fraction).
    #[arg(long)]
    pub bridge_monthly_rate: Option<Decimal>,

    /// Months of bridge financing (may be fractional).
    #[arg(long)]
    pub bridge_months: Option<Decimal>,

    /// Personal income tax mode: exempt, assessed1 or diff20.
    #[arg(long)]
    pub pit_mode: Option<PitMode>,

    /// Deductible costs under the diff20 mode.
    #[arg(long, value_parser = parse_money)]
    pub deductibles: Option<Decimal>,

    /// Loan interest already paid, deductible under the diff20 mode.
    #[arg(long, value_parser = parse_money)]
    pub paid_loan_interest: Option<Decimal>,

    /// Flat miscellaneous seller costs.
    #[arg(long, value_parser = parse_money)]
    pub other_fees: Option<Decimal>,

    /// Show the line-item breakdown table.
    #[arg(long)]
    pub breakdown: bool,

    /// Persist the resulting state as the last state.
    #[arg(long)]
    pub save: bool,
}

impl SellerCmd {
    fn apply(&self, input: &mut SellerInput) {
        if let Some(v) = self.sale_price {
            input.sale_price = v;
            // A new contract price resets the guide price unless one is
            // given explicitly.
            if self.vat_guide_price.is_none() {
                input.vat_guide_price = v;
            }
        }
        if let Some(v) = self.vat_guide_price {
            input.vat_guide_price = v;
        }
        if let Some(v) = self.original_price {
            input.original_purchase_price = v;
        }
        if let Some(v) = self.original_deed_tax_rate {
            input.original_deed_tax_rate = v;
        }
        if let Some(v) = self.over_two_years {
            input.is_over_two_years = v;
        }
        if let Some(v) = self.over_five_years {
            input.is_over_five_years = v;
        }
        if let Some(v) = self.only_home {
            input.only_home = v;
        }
        if let Some(v) = self.vat_rate {
            input.vat_rate = v;
        }
        if let Some(v) = self.surcharge_on_vat {
            input.surcharge_on_vat = v;
        }
        if let Some(v) = self.agent_rate {
            input.seller_agent_rate = v;
        }
        if let Some(v) = self.remaining_loan {
            input.remaining_loan = v;
        }
        if let Some(v) = self.bridge_monthly_rate {
            input.bridge_monthly_rate = v;
        }
        if let Some(v) = self.bridge_months {
            input.bridge_months = v;
        }
        if let Some(v) = self.pit_mode {
            input.pit_mode = v;
        }
        if let Some(v) = self.deductibles {
            input.allowed_deductibles = v;
        }
        if let Some(v) = self.paid_loan_interest {
            input.paid_loan_interest = v;
        }
        if let Some(v) = self.other_fees {
            input.other_seller_fees = v;
        }
    }
}

pub fn run(
    cli: &Cli,
    cmd: &SellerCmd,
) -> Result<()> {
    let (store, mut state) = load_state(cli)?;
    apply_city_selection(cli, &mut state)?;

    cmd.apply(&mut state.seller_input);
    state.seller_input = state.seller_input.clone().normalized();
    // The buyer side shares the contract price; keep it in sync the way the
    // form does.
    state.buyer_input.sale_price = state.seller_input.sale_price;
    state.buyer_input = state.buyer_input.clone().normalized();

    for issue in validate_seller_input(&SellerDraft::from(&state.seller_input)) {
        warn!("{issue}");
    }

    let result = calc_seller(&state.seller_input);
    print!(
        "{}",
        report::render_seller_summary(&state.seller_input, &result)
    );
    if cmd.breakdown {
        print!(
            "{}",
            report::render_seller_breakdown(&state.seller_input, &result)
        );
    }

    if cmd.save {
        store.save_last_state(&state)?;
    }

    Ok(())
}
