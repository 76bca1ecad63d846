//! Buyer-side cost breakdown.
//!
//! Two distinct price bases meet here: deed tax keys off the assessed price
//! (a policy valuation), while the brokerage fee and the total keep to the
//! actual contract price.

use crate::calculations::common::round_half_up;
use crate::models::{BuyerInput, BuyerResult};

/// Computes the full buyer-side breakdown. Pure and total.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use resale_core::{BuyerInput, calc_buyer};
///
/// let input = BuyerInput {
///     sale_price: dec!(3_000_000),
///     assessed_price: dec!(3_200_000),
///     deed_tax_rate: dec!(0.01),
///     buyer_agent_rate: dec!(0.01),
///     buyer_loan_fees: dec!(0),
/// };
///
/// let result = calc_buyer(&input);
/// assert_eq!(result.deed_tax, dec!(32_000));
/// assert_eq!(result.buyer_total, dec!(3_062_000));
/// ```
pub fn calc_buyer(input: &BuyerInput) -> BuyerResult {
    let deed_tax = round_half_up(input.assessed_price * input.deed_tax_rate);
    let buyer_agent_fee = round_half_up(input.sale_price * input.buyer_agent_rate);
    let buyer_total =
        round_half_up(input.sale_price + deed_tax + buyer_agent_fee + input.buyer_loan_fees);

    BuyerResult {
        deed_tax,
        buyer_agent_fee,
        buyer_total,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    fn base_input() -> BuyerInput {
        BuyerInput {
            sale_price: dec!(3_000_000),
            assessed_price: Decimal::ZERO,
            deed_tax_rate: dec!(0.01),
            buyer_agent_rate: dec!(0.01),
            buyer_loan_fees: Decimal::ZERO,
        }
        .normalized()
    }

    #[test]
    fn identical_inputs_yield_identical_results() {
        let input = base_input();

        assert_eq!(calc_buyer(&input), calc_buyer(&input.clone()));
    }

    #[test]
    fn deed_tax_keys_off_assessed_price_total_off_sale_price() {
        let input = BuyerInput {
            assessed_price: dec!(3_200_000),
            ..base_input()
        };

        let result = calc_buyer(&input);

        assert_eq!(result.deed_tax, dec!(32_000));
        assert_eq!(result.buyer_agent_fee, dec!(30_000));
        // 3,000,000 + 32,000 + 30,000 + 0
        assert_eq!(result.buyer_total, dec!(3_062_000));
    }

    #[test]
    fn loan_fees_add_flat_to_the_total() {
        let input = BuyerInput {
            buyer_loan_fees: dec!(15_000),
            ..base_input()
        };

        let result = calc_buyer(&input);

        assert_eq!(result.buyer_total, dec!(3_075_000));
    }

    #[test]
    fn zero_sale_price_scales_everything_to_zero() {
        let input = BuyerInput {
            sale_price: Decimal::ZERO,
            assessed_price: Decimal::ZERO,
            deed_tax_rate: dec!(0.01),
            buyer_agent_rate: dec!(0.01),
            buyer_loan_fees: Decimal::ZERO,
        };

        let result = calc_buyer(&input);

        assert_eq!(result.deed_tax, dec!(0));
        assert_eq!(result.buyer_total, dec!(0));
    }
}
