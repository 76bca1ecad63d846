//! Parsing and display helpers for money amounts and rates.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Strips grouping separators (ASCII and fullwidth), currency glyphs and
/// whitespace before parsing.
fn strip_decorations(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, ',' | '，' | '￥' | '¥') && !c.is_whitespace())
        .collect()
}

/// Parses a user-typed amount.
///
/// After stripping decorations, the informal magnitude suffixes are expanded
/// by digit-string substitution (`万` becomes `0000`, `千` becomes `000`)
/// before the numeric parse. The substitution is positional, not unit-aware:
/// `3.5万` parses as `3.5`, and mixed suffixes concatenate into one digit
/// string. Best-effort input convenience, not an expression evaluator.
/// Anything still unparsable yields zero.
pub fn parse_amount(text: &str) -> Decimal {
    let cleaned = strip_decorations(text);
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    let expanded = cleaned.replace('万', "0000").replace('千', "000");
    match Decimal::from_str(&expanded) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(input = %text, "unparsable amount: {}", error);
            Decimal::ZERO
        }
    }
}

/// Formats an amount for an editable money field: grouped integer digits, no
/// fraction. Zero maps to the empty string ("no input yet", not "zero").
pub fn format_amount_input(amount: Decimal) -> String {
    if amount.is_zero() {
        return String::new();
    }

    let rounded =
        amount.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    group_digits(&rounded.to_string())
}

/// Formats a monetary value for reports: currency glyph plus grouped digits,
/// with two fraction digits only when the settled value has any.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let (sign, magnitude) = if rounded < Decimal::ZERO {
        ("-", -rounded)
    } else {
        ("", rounded)
    };

    let text = if magnitude.fract().is_zero() {
        group_digits(&magnitude.trunc().to_string())
    } else {
        let fixed = format!("{magnitude:.2}");
        let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        format!("{}.{}", group_digits(whole), frac)
    };

    format!("{sign}¥{text}")
}

/// Formats a decimal-fraction rate as a percentage with one to two fraction
/// digits: `0.053` becomes `5.3%`, `0.12` becomes `12.0%`.
pub fn format_percent(rate: Decimal) -> String {
    let scaled = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    if scaled.scale() == 0 {
        format!("{scaled}.0%")
    } else {
        format!("{scaled}%")
    }
}

/// Inserts a grouping comma every three digits, right to left. The input is
/// a plain integer digit string, optionally signed.
fn group_digits(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}")
}
