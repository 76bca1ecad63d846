use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Buyer-side transaction inputs.
///
/// Same lifecycle as [`SellerInput`](crate::SellerInput): a plain value
/// record handed to [`calc_buyer`](crate::calc_buyer) on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuyerInput {
    /// Agreed contract price, shared with the seller side.
    pub sale_price: Decimal,

    /// Assessed price used as the deed-tax base. Zero means "unset" and is
    /// filled from `sale_price` by [`BuyerInput::normalized`].
    pub assessed_price: Decimal,

    /// Buyer-side deed-tax rate, usually one of a city's preset slots.
    pub deed_tax_rate: Decimal,

    /// Buyer-side brokerage fee rate, applied to `sale_price`.
    pub buyer_agent_rate: Decimal,

    /// Flat loan-related costs (appraisal, guarantee fees).
    pub buyer_loan_fees: Decimal,
}

impl Default for BuyerInput {
    fn default() -> Self {
        Self {
            sale_price: Decimal::ZERO,
            assessed_price: Decimal::ZERO,
            deed_tax_rate: dec!(0.01),
            buyer_agent_rate: dec!(0.01),
            buyer_loan_fees: Decimal::ZERO,
        }
    }
}

impl BuyerInput {
    /// Fills derived defaults: a zero assessed price means "use the contract
    /// price". The single upgrade path for persisted records as well.
    pub fn normalized(mut self) -> Self {
        if self.assessed_price.is_zero() {
            self.assessed_price = self.sale_price;
        }
        self
    }
}

/// Partially-populated buyer inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerDraft {
    pub sale_price: Option<Decimal>,
    pub assessed_price: Option<Decimal>,
    pub deed_tax_rate: Option<Decimal>,
    pub buyer_agent_rate: Option<Decimal>,
    pub buyer_loan_fees: Option<Decimal>,
}

impl BuyerDraft {
    /// Completes the draft, filling absent fields from the form defaults.
    pub fn resolve(&self) -> BuyerInput {
        let d = BuyerInput::default();
        BuyerInput {
            sale_price: self.sale_price.unwrap_or(d.sale_price),
            assessed_price: self.assessed_price.unwrap_or(d.assessed_price),
            deed_tax_rate: self.deed_tax_rate.unwrap_or(d.deed_tax_rate),
            buyer_agent_rate: self.buyer_agent_rate.unwrap_or(d.buyer_agent_rate),
            buyer_loan_fees: self.buyer_loan_fees.unwrap_or(d.buyer_loan_fees),
        }
        .normalized()
    }
}

impl From<&BuyerInput> for BuyerDraft {
    fn from(input: &BuyerInput) -> Self {
        Self {
            sale_price: Some(input.sale_price),
            assessed_price: Some(input.assessed_price),
            deed_tax_rate: Some(input.deed_tax_rate),
            buyer_agent_rate: Some(input.buyer_agent_rate),
            buyer_loan_fees: Some(input.buyer_loan_fees),
        }
    }
}

/// Buyer-side cost breakdown. Ephemeral, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerResult {
    /// Deed tax, computed off the assessed price.
    pub deed_tax: Decimal,

    /// Buyer-side brokerage fee, computed off the contract price.
    pub buyer_agent_fee: Decimal,

    /// Total cash the buyer needs: price plus taxes and fees.
    pub buyer_total: Decimal,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn normalized_fills_assessed_price_from_sale_price() {
        let input = BuyerInput {
            sale_price: dec!(3_000_000),
            ..BuyerInput::default()
        }
        .normalized();

        assert_eq!(input.assessed_price, dec!(3_000_000));
    }

    #[test]
    fn empty_draft_resolves_to_defaults() {
        assert_eq!(BuyerDraft::default().resolve(), BuyerInput::default());
    }
}
