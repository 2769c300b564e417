use std::io;
use std::path::PathBuf;

use super::traits::RecordKind;

/// Failures while reading or writing a record collection
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed {kind} data in {}: {source}", .path.display())]
    Serialization {
        kind: RecordKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no {kind} ids left: the collection already holds id {max_id}")]
    IdsExhausted { kind: RecordKind, max_id: u64 },
    #[error("{kind} collection is unavailable: {reason}")]
    Unavailable { kind: RecordKind, reason: String },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}
