//! Advisory input validation.
//!
//! The validators accept partially-populated drafts (fields may be absent
//! mid-form-fill) and return an insertion-ordered list of human-readable
//! violations, empty when the input is valid. They never panic and never
//! mutate their input; the calculators run regardless of what they report.

use std::fmt;

use rust_decimal::Decimal;

use crate::models::{BuyerDraft, SellerDraft};

/// A single violation reported by a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Field the rule applies to, in snake case.
    pub field: &'static str,
    /// Human-readable statement of the violated constraint.
    pub message: &'static str,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Required money field: present and strictly positive.
fn require_positive(
    issues: &mut Vec<ValidationIssue>,
    field: &'static str,
    message: &'static str,
    value: Option<Decimal>,
) {
    if !value.is_some_and(|v| v > Decimal::ZERO) {
        issues.push(ValidationIssue { field, message });
    }
}

/// Rate field: present and within `[0, 1]`.
fn require_rate(
    issues: &mut Vec<ValidationIssue>,
    field: &'static str,
    message: &'static str,
    value: Option<Decimal>,
) {
    if !value.is_some_and(|v| v >= Decimal::ZERO && v <= Decimal::ONE) {
        issues.push(ValidationIssue { field, message });
    }
}

/// Amount field: present and non-negative.
fn require_non_negative(
    issues: &mut Vec<ValidationIssue>,
    field: &'static str,
    message: &'static str,
    value: Option<Decimal>,
) {
    if !value.is_some_and(|v| v >= Decimal::ZERO) {
        issues.push(ValidationIssue { field, message });
    }
}

/// Checks a seller draft against the documented input bounds.
pub fn validate_seller_input(draft: &SellerDraft) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    require_positive(
        &mut issues,
        "sale_price",
        "sale price must be greater than 0",
        draft.sale_price,
    );
    require_positive(
        &mut issues,
        "original_purchase_price",
        "original purchase price must be greater than 0",
        draft.original_purchase_price,
    );
    require_rate(
        &mut issues,
        "original_deed_tax_rate",
        "original deed-tax rate must be between 0% and 100%",
        draft.original_deed_tax_rate,
    );
    require_rate(
        &mut issues,
        "vat_rate",
        "VAT rate must be between 0% and 100%",
        draft.vat_rate,
    );
    require_rate(
        &mut issues,
        "surcharge_on_vat",
        "VAT surcharge factor must be between 0% and 100%",
        draft.surcharge_on_vat,
    );
    require_rate(
        &mut issues,
        "seller_agent_rate",
        "seller agent fee rate must be between 0% and 100%",
        draft.seller_agent_rate,
    );
    require_non_negative(
        &mut issues,
        "remaining_loan",
        "remaining loan cannot be negative",
        draft.remaining_loan,
    );
    require_rate(
        &mut issues,
        "bridge_monthly_rate",
        "bridge monthly rate must be between 0% and 100%",
        draft.bridge_monthly_rate,
    );
    require_non_negative(
        &mut issues,
        "bridge_months",
        "bridge months cannot be negative",
        draft.bridge_months,
    );
    require_non_negative(
        &mut issues,
        "paid_loan_interest",
        "paid loan interest cannot be negative",
        draft.paid_loan_interest,
    );

    issues
}

/// Checks a buyer draft against the documented input bounds.
pub fn validate_buyer_input(draft: &BuyerDraft) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    require_positive(
        &mut issues,
        "sale_price",
        "sale price must be greater than 0",
        draft.sale_price,
    );
    require_rate(
        &mut issues,
        "deed_tax_rate",
        "deed-tax rate must be between 0% and 100%",
        draft.deed_tax_rate,
    );
    require_rate(
        &mut issues,
        "buyer_agent_rate",
        "buyer agent fee rate must be between 0% and 100%",
        draft.buyer_agent_rate,
    );
    require_non_negative(
        &mut issues,
        "buyer_loan_fees",
        "buyer loan fees cannot be negative",
        draft.buyer_loan_fees,
    );

    issues
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{BuyerInput, SellerInput};

    fn valid_seller_draft() -> SellerDraft {
        SellerDraft::from(
            &SellerInput {
                sale_price: dec!(3_000_000),
                original_purchase_price: dec!(2_000_000),
                ..SellerInput::default()
            }
            .normalized(),
        )
    }

    fn valid_buyer_draft() -> BuyerDraft {
        BuyerDraft::from(
            &BuyerInput {
                sale_price: dec!(3_000_000),
                ..BuyerInput::default()
            }
            .normalized(),
        )
    }

    // =========================================================================
    // seller
    // =========================================================================

    #[test]
    fn fully_valid_seller_draft_yields_no_issues() {
        assert_eq!(validate_seller_input(&valid_seller_draft()), vec![]);
    }

    #[test]
    fn empty_seller_draft_reports_every_required_field() {
        let issues = validate_seller_input(&SellerDraft::default());

        let fields: Vec<&str> = issues.iter().map(|issue| issue.field).collect();
        assert_eq!(
            fields,
            vec![
                "sale_price",
                "original_purchase_price",
                "original_deed_tax_rate",
                "vat_rate",
                "surcharge_on_vat",
                "seller_agent_rate",
                "remaining_loan",
                "bridge_monthly_rate",
                "bridge_months",
                "paid_loan_interest",
            ]
        );
    }

    #[test]
    fn zero_sale_price_is_rejected() {
        let draft = SellerDraft {
            sale_price: Some(dec!(0)),
            ..valid_seller_draft()
        };

        let issues = validate_seller_input(&draft);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "sale_price");
        assert!(issues[0].message.contains("sale price"));
    }

    #[test]
    fn rate_above_one_is_rejected() {
        let draft = SellerDraft {
            seller_agent_rate: Some(dec!(1.5)),
            ..valid_seller_draft()
        };

        let issues = validate_seller_input(&draft);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "seller_agent_rate");
    }

    #[test]
    fn negative_loan_is_rejected() {
        let draft = SellerDraft {
            remaining_loan: Some(dec!(-1)),
            ..valid_seller_draft()
        };

        assert_eq!(validate_seller_input(&draft).len(), 1);
    }

    #[test]
    fn zero_rates_and_amounts_are_allowed() {
        let draft = SellerDraft {
            seller_agent_rate: Some(dec!(0)),
            remaining_loan: Some(dec!(0)),
            bridge_months: Some(dec!(0)),
            ..valid_seller_draft()
        };

        assert_eq!(validate_seller_input(&draft), vec![]);
    }

    // =========================================================================
    // buyer
    // =========================================================================

    #[test]
    fn fully_valid_buyer_draft_yields_no_issues() {
        assert_eq!(validate_buyer_input(&valid_buyer_draft()), vec![]);
    }

    #[test]
    fn empty_buyer_draft_reports_every_required_field() {
        let issues = validate_buyer_input(&BuyerDraft::default());

        let fields: Vec<&str> = issues.iter().map(|issue| issue.field).collect();
        assert_eq!(
            fields,
            vec![
                "sale_price",
                "deed_tax_rate",
                "buyer_agent_rate",
                "buyer_loan_fees",
            ]
        );
    }

    #[test]
    fn negative_buyer_loan_fees_are_rejected() {
        let draft = BuyerDraft {
            buyer_loan_fees: Some(dec!(-100)),
            ..valid_buyer_draft()
        };

        let issues = validate_buyer_input(&draft);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "buyer_loan_fees");
    }
}
