//! Text rendering of summaries, breakdowns and the exportable report.
//!
//! All renderers are pure functions over a snapshot of inputs and results;
//! nothing here feeds back into the calculation or the stored state.

use std::fmt::Write as _;
use std::io;

use chrono::{DateTime, Local};
use resale_core::amount::{format_currency, format_percent};
use resale_core::{BuyerInput, BuyerResult, CityPolicy, SellerInput, SellerResult};
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything the export renders, snapshotted at one point in time.
pub struct ReportData<'a> {
    pub seller_input: &'a SellerInput,
    pub buyer_input: &'a BuyerInput,
    pub seller_result: &'a SellerResult,
    pub buyer_result: &'a BuyerResult,
    pub city: &'a CityPolicy,
    pub surcharge_discount: bool,
    pub generated_at: DateTime<Local>,
}

/// One formatted row in the CSV line-item export.
#[derive(Debug, Clone, PartialEq, Serialize)]
struct LineItemRecord {
    side: &'static str,
    item: &'static str,
    amount: String,
}

fn line(
    out: &mut String,
    label: &str,
    value: &str,
) {
    let _ = writeln!(out, "  {label:<24} {value:>16}");
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// The seller line items in display order: each intermediate, the totals,
/// and the net figures.
fn seller_items(
    input: &SellerInput,
    result: &SellerResult,
) -> Vec<(&'static str, Decimal)> {
    vec![
        ("Original deed tax", result.original_deed_tax),
        ("VAT", result.vat),
        ("VAT surcharge", result.vat_surcharge),
        ("VAT total", result.vat_total),
        ("Personal income tax", result.pit),
        ("Seller agent fee", result.seller_agent_fee),
        ("Bridge fee", result.bridge_fee),
        ("Other seller fees", input.other_seller_fees),
        ("Seller taxes and fees", result.seller_taxes_and_fees),
        ("Historical difference", result.difference),
        ("Net profit before loan", result.net_profit_before_loan),
        ("Net cash after loan", result.net_cash_after_loan),
    ]
}

fn buyer_items(
    input: &BuyerInput,
    result: &BuyerResult,
) -> Vec<(&'static str, Decimal)> {
    vec![
        ("Deed tax", result.deed_tax),
        ("Buyer agent fee", result.buyer_agent_fee),
        ("Buyer loan fees", input.buyer_loan_fees),
        ("Buyer total cost", result.buyer_total),
    ]
}

/// Short seller summary: the headline figures only.
pub fn render_seller_summary(
    input: &SellerInput,
    result: &SellerResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Seller (sale price {})",
        format_currency(input.sale_price)
    );
    line(&mut out, "VAT total", &format_currency(result.vat_total));
    line(&mut out, "Personal income tax", &format_currency(result.pit));
    line(
        &mut out,
        "Taxes and fees",
        &format_currency(result.seller_taxes_and_fees),
    );
    line(
        &mut out,
        "Net profit before loan",
        &format_currency(result.net_profit_before_loan),
    );
    line(
        &mut out,
        "Net cash after loan",
        &format_currency(result.net_cash_after_loan),
    );
    out
}

/// Short buyer summary: the headline figures only.
pub fn render_buyer_summary(
    input: &BuyerInput,
    result: &BuyerResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Buyer (sale price {})",
        format_currency(input.sale_price)
    );
    line(&mut out, "Deed tax", &format_currency(result.deed_tax));
    line(
        &mut out,
        "Agent fee",
        &format_currency(result.buyer_agent_fee),
    );
    line(
        &mut out,
        "Total cost",
        &format_currency(result.buyer_total),
    );
    out
}

/// Full seller line-item table.
pub fn render_seller_breakdown(
    input: &SellerInput,
    result: &SellerResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Seller line items:");
    for (label, amount) in seller_items(input, result) {
        line(&mut out, label, &format_currency(amount));
    }
    out
}

/// Full buyer line-item table.
pub fn render_buyer_breakdown(
    input: &BuyerInput,
    result: &BuyerResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Buyer line items:");
    for (label, amount) in buyer_items(input, result) {
        line(&mut out, label, &format_currency(amount));
    }
    out
}

/// One city policy entry for the `cities` listing.
pub fn render_city(policy: &CityPolicy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", policy.name);
    let _ = writeln!(
        out,
        "  VAT {}, surcharge {}, default PIT {}",
        format_percent(policy.vat_rate),
        format_percent(policy.surcharge_on_vat),
        policy.pit_default.label(),
    );
    for preset in &policy.deed_tax_presets {
        let _ = writeln!(
            out,
            "    {:<28} {:>6}",
            preset.label,
            format_percent(preset.rate)
        );
    }
    out
}

/// The full exportable report, mirroring the printable layout: header,
/// policy line, property facts, both line-item tables, disclaimer.
pub fn render_report(data: &ReportData<'_>) -> String {
    let seller = data.seller_input;
    let mut out = String::new();

    let _ = writeln!(out, "Second-Hand Sale Cost Report");
    let _ = writeln!(out, "============================");
    let _ = writeln!(
        out,
        "Generated: {}",
        data.generated_at.format("%Y-%m-%d %H:%M")
    );
    let _ = writeln!(
        out,
        "Policy: {} (VAT {}, surcharge {}{})",
        data.city.name,
        format_percent(seller.vat_rate),
        format_percent(seller.surcharge_on_vat),
        if data.surcharge_discount {
            ", halved"
        } else {
            ""
        },
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Property");
    line(&mut out, "Sale price", &format_currency(seller.sale_price));
    line(
        &mut out,
        "VAT guide price",
        &format_currency(seller.vat_guide_price),
    );
    line(
        &mut out,
        "Original purchase price",
        &format_currency(seller.original_purchase_price),
    );
    line(
        &mut out,
        "Original deed-tax rate",
        &format_percent(seller.original_deed_tax_rate),
    );
    line(
        &mut out,
        "Held over two years",
        yes_no(seller.is_over_two_years),
    );
    line(
        &mut out,
        "Held over five years",
        yes_no(seller.is_over_five_years),
    );
    line(&mut out, "Only home", yes_no(seller.only_home));
    line(&mut out, "PIT mode", seller.pit_mode.label());
    let _ = writeln!(out);

    out.push_str(&render_seller_breakdown(seller, data.seller_result));
    let _ = writeln!(out);
    out.push_str(&render_buyer_breakdown(data.buyer_input, data.buyer_result));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Figures follow a simplified policy model, for reference only."
    );

    out
}

/// Writes one CSV row per line item, both sides, amounts preformatted.
pub fn write_line_items_csv<W: io::Write>(
    data: &ReportData<'_>,
    writer: W,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for (item, amount) in seller_items(data.seller_input, data.seller_result) {
        wtr.serialize(LineItemRecord {
            side: "seller",
            item,
            amount: format_currency(amount),
        })?;
    }
    for (item, amount) in buyer_items(data.buyer_input, data.buyer_result) {
        wtr.serialize(LineItemRecord {
            side: "buyer",
            item,
            amount: format_currency(amount),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
