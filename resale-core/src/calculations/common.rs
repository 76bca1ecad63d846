//! Shared arithmetic helpers for the cost calculations.

use rust_decimal::Decimal;

/// Rounds a monetary value to two decimal places, half away from zero.
///
/// Every line of the breakdown is settled to currency precision with this
/// before it feeds the next line.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use resale_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(19931.6244)), dec!(19931.62));
/// assert_eq!(round_half_up(dec!(0.005)), dec!(0.01));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
