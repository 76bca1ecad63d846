//! Persistence for the calculator state.
//!
//! Two independent, versioned JSON blobs — the last working state and the
//! named saved records — each behind a fixed storage key. Writes are atomic
//! from the caller's point of view, and reads run every record through the
//! same default-filling routine used at input construction, so blobs saved
//! by older builds rehydrate transparently.

mod error;
mod state;
mod store;

pub use error::StoreError;
pub use state::{LastState, SavedRecord, SavedRecords};
pub use store::{LAST_STATE_KEY, SAVED_RECORDS_KEY, StateStore};
