use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PitMode, SellerInput};

/// One deed-tax rate slot offered by a city. A zero rate marks the
/// "custom" slot whose rate the buyer fills in directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeedTaxPreset {
    pub label: String,
    pub rate: Decimal,
}

/// Named bundle of a city's default tax policy parameters.
///
/// Read-only reference data. Selecting a city overwrites the matching
/// fields of the active inputs; it never recomputes anything itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityPolicy {
    pub name: String,
    pub vat_rate: Decimal,
    pub surcharge_on_vat: Decimal,
    pub pit_default: PitMode,
    /// Ordered deed-tax rate slots, as offered to the buyer.
    pub deed_tax_presets: Vec<DeedTaxPreset>,
}

impl CityPolicy {
    /// Surcharge rate after the optional city-wide halving concession.
    pub fn effective_surcharge(&self, discount: bool) -> Decimal {
        if discount {
            self.surcharge_on_vat / Decimal::TWO
        } else {
            self.surcharge_on_vat
        }
    }

    /// Overwrites the policy-derived fields of a seller input.
    pub fn apply_to_seller(&self, input: &mut SellerInput, surcharge_discount: bool) {
        input.vat_rate = self.vat_rate;
        input.surcharge_on_vat = self.effective_surcharge(surcharge_discount);
        input.pit_mode = self.pit_default;
    }

    /// First preset with a concrete (non-custom) rate, used as the buyer's
    /// starting slot.
    pub fn default_deed_tax_rate(&self) -> Option<Decimal> {
        self.deed_tax_presets
            .iter()
            .map(|preset| preset.rate)
            .find(|rate| *rate > Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn policy() -> CityPolicy {
        CityPolicy {
            name: "Testville".to_string(),
            vat_rate: dec!(0.053),
            surcharge_on_vat: dec!(0.12),
            pit_default: PitMode::Diff20,
            deed_tax_presets: vec![
                DeedTaxPreset {
                    label: "Custom".to_string(),
                    rate: dec!(0),
                },
                DeedTaxPreset {
                    label: "First home".to_string(),
                    rate: dec!(0.01),
                },
            ],
        }
    }

    #[test]
    fn discount_halves_only_the_surcharge() {
        let policy = policy();

        assert_eq!(policy.effective_surcharge(false), dec!(0.12));
        assert_eq!(policy.effective_surcharge(true), dec!(0.06));
        assert_eq!(policy.vat_rate, dec!(0.053));
    }

    #[test]
    fn applying_a_policy_overwrites_the_derived_fields() {
        let policy = policy();
        let mut input = SellerInput {
            sale_price: dec!(3_000_000),
            ..SellerInput::default()
        };

        policy.apply_to_seller(&mut input, true);

        assert_eq!(input.vat_rate, dec!(0.053));
        assert_eq!(input.surcharge_on_vat, dec!(0.06));
        assert_eq!(input.pit_mode, PitMode::Diff20);
        // Untouched fields keep their values.
        assert_eq!(input.sale_price, dec!(3_000_000));
    }

    #[test]
    fn default_deed_tax_rate_skips_the_custom_slot() {
        assert_eq!(policy().default_deed_tax_rate(), Some(dec!(0.01)));
    }
}
