use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::models::PitMode;

/// Seller-side transaction inputs.
///
/// An immutable value record: the surrounding form layer replaces fields and
/// hands the whole record to [`calc_seller`](crate::calc_seller) on every
/// change. All rates are decimal fractions in `[0, 1]`; all money fields are
/// currency-unit amounts.
///
/// Missing fields of a persisted record deserialize to the [`Default`]
/// values, so blobs saved by older builds stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerInput {
    /// Agreed contract price; basis for most downstream figures.
    pub sale_price: Decimal,

    /// Assessed/guide price used as the VAT base. Zero means "unset" and is
    /// filled from `sale_price` by [`SellerInput::normalized`].
    pub vat_guide_price: Decimal,

    /// Total price of the original purchase.
    pub original_purchase_price: Decimal,

    /// Deed-tax rate paid on the original purchase.
    pub original_deed_tax_rate: Decimal,

    /// Held at least two years; exempts the sale from VAT.
    pub is_over_two_years: bool,

    /// Held at least five years; with `only_home`, exempts from PIT.
    pub is_over_five_years: bool,

    /// The household's only residence.
    pub only_home: bool,

    /// VAT rate. City-derived but independently editable.
    pub vat_rate: Decimal,

    /// Combined local surtaxes as a fraction of the VAT amount itself.
    pub surcharge_on_vat: Decimal,

    /// Seller-side brokerage fee rate, applied to `sale_price`.
    pub seller_agent_rate: Decimal,

    /// Mortgage balance to clear before closing.
    pub remaining_loan: Decimal,

    /// Monthly rate of the bridge financing used to clear the loan.
    pub bridge_monthly_rate: Decimal,

    /// Months of bridge financing. May be fractional.
    pub bridge_months: Decimal,

    /// Personal income tax method.
    pub pit_mode: PitMode,

    /// Deductible costs (renovation, appraisal). Only used under `Diff20`.
    pub allowed_deductibles: Decimal,

    /// Loan interest already paid. Only used under `Diff20`.
    pub paid_loan_interest: Decimal,

    /// Flat miscellaneous seller costs (registration fee etc.).
    pub other_seller_fees: Decimal,

    /// Form-surface flag (whether the VAT rate field is unlocked). Carried
    /// for persistence compatibility; no effect on any calculation.
    pub vat_rate_editable: bool,
}

impl Default for SellerInput {
    fn default() -> Self {
        Self {
            sale_price: Decimal::ZERO,
            vat_guide_price: Decimal::ZERO,
            original_purchase_price: Decimal::ZERO,
            original_deed_tax_rate: dec!(0.015),
            is_over_two_years: true,
            is_over_five_years: false,
            only_home: false,
            vat_rate: dec!(0.053),
            surcharge_on_vat: dec!(0.12),
            seller_agent_rate: dec!(0.01),
            remaining_loan: Decimal::ZERO,
            bridge_monthly_rate: dec!(0.008),
            bridge_months: Decimal::ONE,
            pit_mode: PitMode::Assessed1,
            allowed_deductibles: Decimal::ZERO,
            paid_loan_interest: Decimal::ZERO,
            other_seller_fees: dec!(80),
            vat_rate_editable: false,
        }
    }
}

impl SellerInput {
    /// Fills derived defaults: a zero guide price means "use the contract
    /// price". Runs at construction time and again whenever a persisted
    /// record is read, so older saved shapes upgrade through one path.
    pub fn normalized(mut self) -> Self {
        if self.vat_guide_price.is_zero() {
            self.vat_guide_price = self.sale_price;
        }
        self
    }
}

/// Partially-populated seller inputs, as held mid-way through form fill.
///
/// Absent fields are reported by the validators rather than defaulted;
/// [`SellerDraft::resolve`] completes the draft into a full input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerDraft {
    pub sale_price: Option<Decimal>,
    pub vat_guide_price: Option<Decimal>,
    pub original_purchase_price: Option<Decimal>,
    pub original_deed_tax_rate: Option<Decimal>,
    pub is_over_two_years: Option<bool>,
    pub is_over_five_years: Option<bool>,
    pub only_home: Option<bool>,
    pub vat_rate: Option<Decimal>,
    pub surcharge_on_vat: Option<Decimal>,
    pub seller_agent_rate: Option<Decimal>,
    pub remaining_loan: Option<Decimal>,
    pub bridge_monthly_rate: Option<Decimal>,
    pub bridge_months: Option<Decimal>,
    pub pit_mode: Option<PitMode>,
    pub allowed_deductibles: Option<Decimal>,
    pub paid_loan_interest: Option<Decimal>,
    pub other_seller_fees: Option<Decimal>,
    pub vat_rate_editable: Option<bool>,
}

impl SellerDraft {
    /// Completes the draft, filling absent fields from the form defaults.
    pub fn resolve(&self) -> SellerInput {
        let d = SellerInput::default();
        SellerInput {
            sale_price: self.sale_price.unwrap_or(d.sale_price),
            vat_guide_price: self.vat_guide_price.unwrap_or(d.vat_guide_price),
            original_purchase_price: self
                .original_purchase_price
                .unwrap_or(d.original_purchase_price),
            original_deed_tax_rate: self
                .original_deed_tax_rate
                .unwrap_or(d.original_deed_tax_rate),
            is_over_two_years: self.is_over_two_years.unwrap_or(d.is_over_two_years),
            is_over_five_years: self.is_over_five_years.unwrap_or(d.is_over_five_years),
            only_home: self.only_home.unwrap_or(d.only_home),
            vat_rate: self.vat_rate.unwrap_or(d.vat_rate),
            surcharge_on_vat: self.surcharge_on_vat.unwrap_or(d.surcharge_on_vat),
            seller_agent_rate: self.seller_agent_rate.unwrap_or(d.seller_agent_rate),
            remaining_loan: self.remaining_loan.unwrap_or(d.remaining_loan),
            bridge_monthly_rate: self.bridge_monthly_rate.unwrap_or(d.bridge_monthly_rate),
            bridge_months: self.bridge_months.unwrap_or(d.bridge_months),
            pit_mode: self.pit_mode.unwrap_or(d.pit_mode),
            allowed_deductibles: self.allowed_deductibles.unwrap_or(d.allowed_deductibles),
            paid_loan_interest: self.paid_loan_interest.unwrap_or(d.paid_loan_interest),
            other_seller_fees: self.other_seller_fees.unwrap_or(d.other_seller_fees),
            vat_rate_editable: self.vat_rate_editable.unwrap_or(d.vat_rate_editable),
        }
        .normalized()
    }
}

impl From<&SellerInput> for SellerDraft {
    fn from(input: &SellerInput) -> Self {
        Self {
            sale_price: Some(input.sale_price),
            vat_guide_price: Some(input.vat_guide_price),
            original_purchase_price: Some(input.original_purchase_price),
            original_deed_tax_rate: Some(input.original_deed_tax_rate),
            is_over_two_years: Some(input.is_over_two_years),
            is_over_five_years: Some(input.is_over_five_years),
            only_home: Some(input.only_home),
            vat_rate: Some(input.vat_rate),
            surcharge_on_vat: Some(input.surcharge_on_vat),
            seller_agent_rate: Some(input.seller_agent_rate),
            remaining_loan: Some(input.remaining_loan),
            bridge_monthly_rate: Some(input.bridge_monthly_rate),
            bridge_months: Some(input.bridge_months),
            pit_mode: Some(input.pit_mode),
            allowed_deductibles: Some(input.allowed_deductibles),
            paid_loan_interest: Some(input.paid_loan_interest),
            other_seller_fees: Some(input.other_seller_fees),
            vat_rate_editable: Some(input.vat_rate_editable),
        }
    }
}

/// Seller-side cost breakdown.
///
/// Ephemeral, recomputed on demand; carries no identity. Equal inputs yield
/// equal results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerResult {
    /// Deed tax paid on the original purchase (deductible cost basis).
    pub original_deed_tax: Decimal,

    /// Value-added tax.
    pub vat: Decimal,

    /// Local surtaxes charged on top of the VAT amount.
    pub vat_surcharge: Decimal,

    /// VAT plus its surcharge.
    pub vat_total: Decimal,

    /// Personal income tax.
    pub pit: Decimal,

    /// Seller-side brokerage fee.
    pub seller_agent_fee: Decimal,

    /// Bridge financing cost for clearing the remaining loan.
    pub bridge_fee: Decimal,

    /// Sum of all seller taxes and fees for this transaction.
    pub seller_taxes_and_fees: Decimal,

    /// Historical gain over original price plus original deed tax. May be
    /// negative; independent of the PIT mode.
    pub difference: Decimal,

    /// `difference` minus this transaction's taxes and fees. May be negative.
    pub net_profit_before_loan: Decimal,

    /// Expected cash in hand after taxes, fees, and loan payoff. May be
    /// negative.
    pub net_cash_after_loan: Decimal,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn normalized_fills_guide_price_from_sale_price() {
        let input = SellerInput {
            sale_price: dec!(3_000_000),
            ..SellerInput::default()
        }
        .normalized();

        assert_eq!(input.vat_guide_price, dec!(3_000_000));
    }

    #[test]
    fn normalized_keeps_explicit_guide_price() {
        let input = SellerInput {
            sale_price: dec!(3_000_000),
            vat_guide_price: dec!(3_300_000),
            ..SellerInput::default()
        }
        .normalized();

        assert_eq!(input.vat_guide_price, dec!(3_300_000));
    }

    #[test]
    fn empty_draft_resolves_to_defaults() {
        let resolved = SellerDraft::default().resolve();

        assert_eq!(resolved, SellerInput::default());
    }

    #[test]
    fn draft_round_trips_a_full_input() {
        let input = SellerInput {
            sale_price: dec!(3_000_000),
            original_purchase_price: dec!(2_000_000),
            pit_mode: PitMode::Diff20,
            ..SellerInput::default()
        }
        .normalized();

        assert_eq!(SellerDraft::from(&input).resolve(), input);
    }
}
