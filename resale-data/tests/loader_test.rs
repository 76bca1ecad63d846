//! End-to-end tests for loading city policy files over the builtin presets.

use pretty_assertions::assert_eq;
use resale_core::{PitMode, SellerInput, calc_seller};
use resale_data::{CityPolicyLoader, builtin_cities, merge_policies};
use rust_decimal_macros::dec;

const TEST_CSV: &str = include_str!("../test-data/city_policies.csv");

#[test]
fn loaded_policies_merge_over_the_builtins() {
    let extra = CityPolicyLoader::parse(TEST_CSV.as_bytes()).expect("parse test CSV");
    let merged = merge_policies(builtin_cities(), extra);

    // 7 builtins, Shanghai replaced in place, Chengdu appended.
    assert_eq!(merged.len(), 8);

    let shanghai = merged
        .iter()
        .find(|city| city.name == "Shanghai")
        .expect("Shanghai");
    assert_eq!(shanghai.deed_tax_presets.len(), 3);
    assert_eq!(shanghai.pit_default, PitMode::Diff20);

    let chengdu = merged.last().expect("Chengdu");
    assert_eq!(chengdu.name, "Chengdu");
    assert_eq!(chengdu.deed_tax_presets.len(), 4);
    assert_eq!(chengdu.default_deed_tax_rate(), Some(dec!(0.01)));
}

#[test]
fn a_loaded_policy_drives_the_seller_calculation() {
    let extra = CityPolicyLoader::parse(TEST_CSV.as_bytes()).expect("parse test CSV");
    let merged = merge_policies(builtin_cities(), extra);
    let chengdu = merged.iter().find(|city| city.name == "Chengdu").unwrap();

    let mut input = SellerInput {
        sale_price: dec!(3_000_000),
        original_purchase_price: dec!(2_000_000),
        is_over_two_years: true,
        ..SellerInput::default()
    }
    .normalized();
    chengdu.apply_to_seller(&mut input, false);

    let result = calc_seller(&input);

    // Chengdu defaults to assessed collection: 1% of the contract price.
    assert_eq!(input.pit_mode, PitMode::Assessed1);
    assert_eq!(result.pit, dec!(30_000));
    assert_eq!(result.vat_total, dec!(0));
}
