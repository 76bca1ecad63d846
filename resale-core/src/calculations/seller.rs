//! Seller-side cost breakdown for a second-hand residential sale.
//!
//! Follows the worksheet an agent walks a seller through:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Original deed tax: original purchase price × original deed-tax rate |
//! | 2    | VAT: zero once held two years, else off the tax-inclusive guide price |
//! | 3    | Surcharge on VAT: VAT amount × combined local surtax factor |
//! | 4    | Personal income tax: exempt / 1% assessed / 20% of deducted gain |
//! | 5    | Agent fee: contract price × seller agent rate |
//! | 6    | Bridge fee: remaining loan × monthly rate × months |
//! | 7    | Taxes-and-fees total, historical difference, net figures |
//!
//! The VAT base is the guide price, a policy valuation distinct from both the
//! contract price and the buyer's assessed price; the three must not be
//! conflated.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use resale_core::{PitMode, SellerInput, calc_seller};
//!
//! let input = SellerInput {
//!     sale_price: dec!(3_000_000),
//!     original_purchase_price: dec!(2_000_000),
//!     original_deed_tax_rate: dec!(0.01),
//!     is_over_two_years: true,
//!     pit_mode: PitMode::Assessed1,
//!     seller_agent_rate: dec!(0.01),
//!     other_seller_fees: dec!(0),
//!     ..SellerInput::default()
//! }
//! .normalized();
//!
//! let result = calc_seller(&input);
//! assert_eq!(result.vat_total, dec!(0));
//! assert_eq!(result.pit, dec!(30_000));
//! assert_eq!(result.seller_taxes_and_fees, dec!(60_000));
//! assert_eq!(result.difference, dec!(980_000));
//! assert_eq!(result.net_cash_after_loan, dec!(2_940_000));
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{max, round_half_up};
use crate::models::{PitMode, SellerInput, SellerResult};

/// Computes the full seller-side breakdown.
///
/// Pure and total: out-of-range inputs propagate arithmetically rather than
/// failing. Validity is the job of
/// [`validate_seller_input`](crate::validate_seller_input).
pub fn calc_seller(input: &SellerInput) -> SellerResult {
    let original_deed_tax =
        round_half_up(input.original_purchase_price * input.original_deed_tax_rate);

    let (vat, vat_surcharge, vat_total) = value_added_tax(input);
    let pit = personal_income_tax(input, original_deed_tax);

    let seller_agent_fee = round_half_up(input.sale_price * input.seller_agent_rate);
    // Simple non-compounding carry; no amortization or partial-month proration.
    let bridge_fee =
        round_half_up(input.remaining_loan * input.bridge_monthly_rate * input.bridge_months);

    let seller_taxes_and_fees =
        round_half_up(vat_total + pit + seller_agent_fee + bridge_fee + input.other_seller_fees);

    let difference =
        round_half_up(input.sale_price - (input.original_purchase_price + original_deed_tax));
    let net_profit_before_loan = round_half_up(difference - seller_taxes_and_fees);
    let net_cash_after_loan =
        round_half_up(input.sale_price - seller_taxes_and_fees - input.remaining_loan);

    SellerResult {
        original_deed_tax,
        vat,
        vat_surcharge,
        vat_total,
        pit,
        seller_agent_fee,
        bridge_fee,
        seller_taxes_and_fees,
        difference,
        net_profit_before_loan,
        net_cash_after_loan,
    }
}

/// VAT and its local surcharge as `(vat, surcharge, total)`.
///
/// Zero once the property has been held two years. Otherwise the guide price
/// is treated as tax-inclusive: the base is the guide price net of VAT.
fn value_added_tax(input: &SellerInput) -> (Decimal, Decimal, Decimal) {
    if input.is_over_two_years {
        return (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
    }

    let vat_base = round_half_up(input.vat_guide_price / (Decimal::ONE + input.vat_rate));
    let vat = round_half_up(vat_base * input.vat_rate);
    let vat_surcharge = round_half_up(vat * input.surcharge_on_vat);
    let vat_total = round_half_up(vat + vat_surcharge);

    (vat, vat_surcharge, vat_total)
}

/// Personal income tax.
///
/// The five-years-and-only-home exemption overrides the selected mode, so
/// the holding-period rule is never double-booked inside the per-mode
/// arithmetic.
fn personal_income_tax(
    input: &SellerInput,
    original_deed_tax: Decimal,
) -> Decimal {
    if input.is_over_five_years && input.only_home {
        return Decimal::ZERO;
    }

    match input.pit_mode {
        PitMode::Exempt => Decimal::ZERO,
        // Fixed statutory 1%, independent of any editable rate.
        PitMode::Assessed1 => round_half_up(input.sale_price * Decimal::new(1, 2)),
        PitMode::Diff20 => {
            let profit_base = input.sale_price
                - input.original_purchase_price
                - original_deed_tax
                - input.allowed_deductibles
                - input.paid_loan_interest;
            // Deductions can zero the tax but never turn it into a refund.
            round_half_up(max(profit_base, Decimal::ZERO) * Decimal::new(20, 2))
        }
    }
}
