use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the state store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed state blob '{}'", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode state blob")]
    Encode(#[source] serde_json::Error),
}
