//! CSV loader for user-supplied city policy files.
//!
//! ## CSV format
//!
//! One row per deed-tax preset; city-level columns are repeated on each row.
//! Headers are matched by name, case-sensitive:
//!
//! | Column             | Type             | Notes                            |
//! |--------------------|------------------|----------------------------------|
//! | `city`             | string           | Policy name                      |
//! | `vat_rate`         | decimal fraction | e.g. `0.053`                     |
//! | `surcharge_on_vat` | decimal fraction | e.g. `0.12`                      |
//! | `pit_default`      | string           | `exempt`, `assessed1` or `diff20`|
//! | `preset_label`     | string           | Deed-tax slot label              |
//! | `preset_rate`      | decimal fraction | `0` marks a custom slot          |
//!
//! ### Example
//!
//! ```csv
//! city,vat_rate,surcharge_on_vat,pit_default,preset_label,preset_rate
//! Chengdu,0.053,0.12,assessed1,First home,0.01
//! Chengdu,0.053,0.12,assessed1,Second home,0.02
//! Chengdu,0.053,0.12,assessed1,Custom,0
//! ```

use std::io::Read;
use std::str::FromStr;

use resale_core::{CityPolicy, DeedTaxPreset, PitMode};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading city policy data.
#[derive(Debug, Error)]
pub enum CityPolicyLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unrecognized pit mode '{mode}' on row {row}")]
    InvalidPitMode { mode: String, row: usize },

    #[error("conflicting {field} for city '{city}' on row {row}")]
    InconsistentCity {
        city: String,
        field: &'static str,
        row: usize,
    },
}

impl From<csv::Error> for CityPolicyLoaderError {
    fn from(err: csv::Error) -> Self {
        CityPolicyLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a city policy CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
struct CityPolicyRow {
    city: String,
    vat_rate: Decimal,
    surcharge_on_vat: Decimal,
    pit_default: String,
    preset_label: String,
    preset_rate: Decimal,
}

/// Loader for city policy data from CSV files.
pub struct CityPolicyLoader;

impl CityPolicyLoader {
    /// Parses a CSV reader into grouped city policies.
    ///
    /// Cities keep their first-appearance order; preset rows keep file
    /// order within each city. City-level columns must agree across a
    /// city's rows.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<CityPolicy>, CityPolicyLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut policies: Vec<CityPolicy> = Vec::new();

        for (index, result) in csv_reader.deserialize().enumerate() {
            let row: CityPolicyRow = result?;
            let row_number = index + 1;

            let pit_default = PitMode::from_str(&row.pit_default).map_err(|_| {
                CityPolicyLoaderError::InvalidPitMode {
                    mode: row.pit_default.clone(),
                    row: row_number,
                }
            })?;
            if let Some(pos) = policies.iter().position(|policy| policy.name == row.city) {
                let policy = &mut policies[pos];
                check_consistent(policy, &row, pit_default, row_number)?;
                policy.deed_tax_presets.push(DeedTaxPreset {
                    label: row.preset_label,
                    rate: row.preset_rate,
                });
            } else {
                policies.push(CityPolicy {
                    name: row.city,
                    vat_rate: row.vat_rate,
                    surcharge_on_vat: row.surcharge_on_vat,
                    pit_default,
                    deed_tax_presets: vec![DeedTaxPreset {
                        label: row.preset_label,
                        rate: row.preset_rate,
                    }],
                });
            }
        }

        Ok(policies)
    }
}

fn check_consistent(
    policy: &CityPolicy,
    row: &CityPolicyRow,
    pit_default: PitMode,
    row_number: usize,
) -> Result<(), CityPolicyLoaderError> {
    let conflict = |field: &'static str| CityPolicyLoaderError::InconsistentCity {
        city: policy.name.clone(),
        field,
        row: row_number,
    };

    if policy.vat_rate != row.vat_rate {
        return Err(conflict("vat_rate"));
    }
    if policy.surcharge_on_vat != row.surcharge_on_vat {
        return Err(conflict("surcharge_on_vat"));
    }
    if policy.pit_default != pit_default {
        return Err(conflict("pit_default"));
    }

    Ok(())
}

/// Overlays `extra` on `base`: a policy with a matching name replaces the
/// existing entry, new names append in file order.
pub fn merge_policies(
    base: &[CityPolicy],
    extra: Vec<CityPolicy>,
) -> Vec<CityPolicy> {
    let mut merged = base.to_vec();

    for policy in extra {
        if let Some(pos) = merged.iter().position(|existing| existing.name == policy.name) {
            merged[pos] = policy;
        } else {
            merged.push(policy);
        }
    }

    merged
}
