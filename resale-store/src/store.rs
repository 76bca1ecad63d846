//! Directory-backed JSON store, one file per storage key.

use std::fs;
use std::path::PathBuf;

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::StoreError;
use crate::state::{LastState, SavedRecord, SavedRecords};

/// Fixed storage identifier for the last-state blob.
pub const LAST_STATE_KEY: &str = "resale.last-state";
/// Fixed storage identifier for the saved-records blob.
pub const SAVED_RECORDS_KEY: &str = "resale.saved-records";

/// Key-value JSON store over a directory.
///
/// A write goes to a temporary sibling file first and is renamed into
/// place, so a reader never observes a partially-written blob.
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Write {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read_blob<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.blob_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        let value = serde_json::from_slice(&bytes)
            .map_err(|source| StoreError::Malformed { path, source })?;
        Ok(Some(value))
    }

    fn write_blob<T: Serialize>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StoreError> {
        let path = self.blob_path(key);
        let bytes = serde_json::to_vec_pretty(value).map_err(StoreError::Encode)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &bytes).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;

        debug!(key, path = %path.display(), "wrote state blob");
        Ok(())
    }

    /// Reads the last-state blob. An absent file reads as `None`.
    pub fn load_last_state(&self) -> Result<Option<LastState>, StoreError> {
        Ok(self
            .read_blob::<LastState>(LAST_STATE_KEY)?
            .map(LastState::normalized))
    }

    /// Replaces the last-state blob.
    pub fn save_last_state(&self, state: &LastState) -> Result<(), StoreError> {
        self.write_blob(LAST_STATE_KEY, state)
    }

    /// Reads the saved-records blob. An absent file reads as an empty list.
    pub fn load_records(&self) -> Result<SavedRecords, StoreError> {
        Ok(self
            .read_blob::<SavedRecords>(SAVED_RECORDS_KEY)?
            .map(SavedRecords::normalized)
            .unwrap_or_default())
    }

    /// Replaces the saved-records blob.
    pub fn save_records(&self, records: &SavedRecords) -> Result<(), StoreError> {
        self.write_blob(SAVED_RECORDS_KEY, records)
    }

    /// Inserts or replaces the record with the given name.
    pub fn upsert_record(&self, record: SavedRecord) -> Result<(), StoreError> {
        let mut records = self.load_records()?;
        if let Some(pos) = records.records.iter().position(|r| r.name == record.name) {
            records.records[pos] = record;
        } else {
            records.records.push(record);
        }
        self.save_records(&records)
    }

    /// Removes the named record; returns whether it existed.
    pub fn remove_record(&self, name: &str) -> Result<bool, StoreError> {
        let mut records = self.load_records()?;
        let before = records.records.len();
        records.records.retain(|record| record.name != name);

        let removed = records.records.len() != before;
        if removed {
            self.save_records(&records)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use resale_core::SellerInput;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_state() -> LastState {
        LastState {
            seller_input: SellerInput {
                sale_price: dec!(3_000_000),
                original_purchase_price: dec!(2_000_000),
                ..SellerInput::default()
            }
            .normalized(),
            city_name: "Shanghai".to_string(),
            surcharge_discount: true,
            ..LastState::default()
        }
    }

    #[test]
    fn missing_blobs_read_as_absent_not_as_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path()).expect("open");

        assert_eq!(store.load_last_state().expect("load"), None);
        assert_eq!(store.load_records().expect("load"), SavedRecords::default());
    }

    #[test]
    fn last_state_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path()).expect("open");
        let state = sample_state();

        store.save_last_state(&state).expect("save");
        let loaded = store.load_last_state().expect("load").expect("present");

        assert_eq!(loaded, state);
    }

    #[test]
    fn saving_replaces_the_whole_blob() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path()).expect("open");

        store.save_last_state(&sample_state()).expect("save");
        let mut second = sample_state();
        second.city_name = "Beijing".to_string();
        store.save_last_state(&second).expect("save again");

        let loaded = store.load_last_state().expect("load").expect("present");
        assert_eq!(loaded.city_name, "Beijing");
    }

    #[test]
    fn legacy_last_state_file_upgrades_on_read() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path()).expect("open");
        let legacy = r#"{ "seller_input": { "sale_price": "1000000" } }"#;
        std::fs::write(store.blob_path(LAST_STATE_KEY), legacy).expect("write legacy");

        let loaded = store.load_last_state().expect("load").expect("present");

        assert_eq!(loaded.seller_input.sale_price, dec!(1_000_000));
        assert_eq!(loaded.seller_input.vat_guide_price, dec!(1_000_000));
        assert_eq!(loaded.buyer_input, Default::default());
    }

    #[test]
    fn upsert_appends_then_replaces_by_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path()).expect("open");

        store
            .upsert_record(SavedRecord {
                name: "offer-a".to_string(),
                saved_at: Utc::now(),
                state: sample_state(),
            })
            .expect("insert");
        let mut replacement = sample_state();
        replacement.city_name = "Beijing".to_string();
        store
            .upsert_record(SavedRecord {
                name: "offer-a".to_string(),
                saved_at: Utc::now(),
                state: replacement,
            })
            .expect("replace");

        let records = store.load_records().expect("load").records;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].state.city_name, "Beijing");
    }

    #[test]
    fn remove_reports_whether_a_record_existed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path()).expect("open");

        store
            .upsert_record(SavedRecord {
                name: "offer-a".to_string(),
                saved_at: Utc::now(),
                state: sample_state(),
            })
            .expect("insert");

        assert!(store.remove_record("offer-a").expect("remove"));
        assert!(!store.remove_record("offer-a").expect("remove again"));
        assert_eq!(store.load_records().expect("load").records.len(), 0);
    }

    #[test]
    fn writes_leave_no_temp_file_behind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path()).expect("open");

        store.save_last_state(&sample_state()).expect("save");

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read dir")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
