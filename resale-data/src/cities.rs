//! Builtin city policy presets.
//!
//! Immutable reference data, built once on first use and looked up by name.
//! The values model the common policy baseline: 5.3% VAT, a 12% combined
//! surcharge (Shanghai's is already halved), and per-city customary PIT
//! defaults. For reference only; actual figures are set locally.

use std::sync::OnceLock;

use resale_core::{CityPolicy, DeedTaxPreset, PitMode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Name of the baseline policy used when no city matches.
pub const DEFAULT_CITY_NAME: &str = "General";

fn preset(
    label: &str,
    rate: Decimal,
) -> DeedTaxPreset {
    DeedTaxPreset {
        label: label.to_string(),
        rate,
    }
}

/// The common deed-tax ladder used by most cities.
fn standard_presets() -> Vec<DeedTaxPreset> {
    vec![
        preset("First home, up to 90 sqm", dec!(0.01)),
        preset("First home, 90-140 sqm", dec!(0.015)),
        preset("First home, over 140 sqm", dec!(0.03)),
        preset("Second home", dec!(0.03)),
        preset("Custom", dec!(0)),
    ]
}

/// The baseline ladder with second-home size tiers broken out.
fn general_presets() -> Vec<DeedTaxPreset> {
    vec![
        preset("First home, up to 90 sqm", dec!(0.01)),
        preset("First home, 90-140 sqm", dec!(0.015)),
        preset("First home, over 140 sqm", dec!(0.03)),
        preset("Second home, up to 90 sqm", dec!(0.01)),
        preset("Second home, 90-140 sqm", dec!(0.02)),
        preset("Second home, over 140 sqm", dec!(0.03)),
        preset("Third home or more", dec!(0.03)),
        preset("Custom", dec!(0)),
    ]
}

fn city(
    name: &str,
    surcharge_on_vat: Decimal,
    pit_default: PitMode,
    deed_tax_presets: Vec<DeedTaxPreset>,
) -> CityPolicy {
    CityPolicy {
        name: name.to_string(),
        vat_rate: dec!(0.053),
        surcharge_on_vat,
        pit_default,
        deed_tax_presets,
    }
}

fn build() -> Vec<CityPolicy> {
    vec![
        city(
            DEFAULT_CITY_NAME,
            dec!(0.12),
            PitMode::Assessed1,
            general_presets(),
        ),
        // Shanghai runs the surcharge at half rate and customarily files
        // PIT on the deducted gain.
        city("Shanghai", dec!(0.06), PitMode::Diff20, standard_presets()),
        city("Beijing", dec!(0.12), PitMode::Diff20, standard_presets()),
        city("Shenzhen", dec!(0.12), PitMode::Assessed1, standard_presets()),
        city("Guangzhou", dec!(0.12), PitMode::Assessed1, standard_presets()),
        city("Hangzhou", dec!(0.12), PitMode::Assessed1, standard_presets()),
        city("Nanjing", dec!(0.12), PitMode::Assessed1, standard_presets()),
    ]
}

static CITIES: OnceLock<Vec<CityPolicy>> = OnceLock::new();

/// All builtin policies, in display order.
pub fn builtin_cities() -> &'static [CityPolicy] {
    CITIES.get_or_init(build)
}

/// Looks up a builtin policy by name, falling back to the baseline.
pub fn city_by_name(name: &str) -> &'static CityPolicy {
    let cities = builtin_cities();
    cities
        .iter()
        .find(|city| city.name == name)
        .unwrap_or(&cities[0])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn baseline_comes_first() {
        assert_eq!(builtin_cities()[0].name, DEFAULT_CITY_NAME);
    }

    #[test]
    fn lookup_finds_a_city_by_name() {
        let shanghai = city_by_name("Shanghai");

        assert_eq!(shanghai.surcharge_on_vat, dec!(0.06));
        assert_eq!(shanghai.pit_default, PitMode::Diff20);
    }

    #[test]
    fn unknown_name_falls_back_to_the_baseline() {
        assert_eq!(city_by_name("Atlantis").name, DEFAULT_CITY_NAME);
        assert_eq!(city_by_name("").name, DEFAULT_CITY_NAME);
    }

    #[test]
    fn every_city_ends_with_a_custom_slot() {
        for city in builtin_cities() {
            let last = city.deed_tax_presets.last().expect("presets");
            assert_eq!(last.label, "Custom");
            assert_eq!(last.rate, dec!(0));
        }
    }

    #[test]
    fn every_city_has_a_concrete_default_deed_rate() {
        for city in builtin_cities() {
            assert_eq!(city.default_deed_tax_rate(), Some(dec!(0.01)));
        }
    }
}
