//! Persisted state shapes.
//!
//! Both blobs carry a schema version and deserialize with per-field
//! defaults, so a record written by an older build rehydrates to a valid
//! current shape through one path — the same normalization used when inputs
//! are constructed fresh.

use chrono::{DateTime, Utc};
use resale_core::{BuyerInput, SellerInput};
use serde::{Deserialize, Serialize};

/// Current schema version written into both blobs.
pub(crate) const BLOB_VERSION: u32 = 1;

/// Snapshot of the active inputs and city selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastState {
    pub version: u32,
    pub seller_input: SellerInput,
    pub buyer_input: BuyerInput,
    /// Selected city preset name; empty resolves to the baseline policy.
    pub city_name: String,
    /// Whether the VAT surcharge halving concession is active.
    pub surcharge_discount: bool,
}

impl Default for LastState {
    fn default() -> Self {
        Self {
            version: BLOB_VERSION,
            seller_input: SellerInput::default(),
            buyer_input: BuyerInput::default(),
            city_name: String::new(),
            surcharge_discount: false,
        }
    }
}

impl LastState {
    /// Applies the input-construction defaults to both sides.
    pub fn normalized(mut self) -> Self {
        self.seller_input = self.seller_input.normalized();
        self.buyer_input = self.buyer_input.normalized();
        self
    }
}

/// A named snapshot in the saved-records list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecord {
    pub name: String,
    #[serde(default = "default_saved_at")]
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub state: LastState,
}

fn default_saved_at() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

/// The saved-records blob: an ordered list of named snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedRecords {
    pub version: u32,
    pub records: Vec<SavedRecord>,
}

impl Default for SavedRecords {
    fn default() -> Self {
        Self {
            version: BLOB_VERSION,
            records: Vec::new(),
        }
    }
}

impl SavedRecords {
    /// Applies the input-construction defaults to every record.
    pub fn normalized(mut self) -> Self {
        for record in &mut self.records {
            record.state = record.state.clone().normalized();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn legacy_blob_without_newer_fields_upgrades_through_defaults() {
        // The shape an early build persisted: no version, no guide price,
        // no buyer assessed price.
        let legacy = r#"{
            "seller_input": {
                "sale_price": "3000000",
                "original_purchase_price": "2000000"
            },
            "buyer_input": { "sale_price": "3000000" },
            "city_name": "Shanghai"
        }"#;

        let state: LastState = serde_json::from_str(legacy).expect("deserialize");
        let state = state.normalized();

        assert_eq!(state.version, BLOB_VERSION);
        assert_eq!(state.city_name, "Shanghai");
        assert!(!state.surcharge_discount);
        // Defaults filled exactly as at construction time.
        assert_eq!(state.seller_input.vat_guide_price, dec!(3_000_000));
        assert_eq!(state.seller_input.original_deed_tax_rate, dec!(0.015));
        assert_eq!(state.seller_input.other_seller_fees, dec!(80));
        assert_eq!(state.buyer_input.assessed_price, dec!(3_000_000));
        assert_eq!(state.buyer_input.deed_tax_rate, dec!(0.01));
    }

    #[test]
    fn record_without_timestamp_defaults_to_the_epoch() {
        let legacy = r#"{ "name": "before-listing" }"#;

        let record: SavedRecord = serde_json::from_str(legacy).expect("deserialize");

        assert_eq!(record.name, "before-listing");
        assert_eq!(record.saved_at, DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(record.state, LastState::default());
    }
}
