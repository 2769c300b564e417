//! In-memory storage backend.
//!
//! Collections are kept as JSON text so records go through exactly the same
//! encoding as the file backend. Clones of a connection share the same
//! collections.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::error::StorageError;
use super::traits::{Connection, Record, RecordKind, RecordStorage};

type Collections = HashMap<RecordKind, String>;

#[derive(Debug, Clone, Default)]
pub struct MemoryConnection {
    collections: Arc<Mutex<Collections>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Connection for MemoryConnection {
    type RecordRepository = MemoryRecordRepository;

    fn create_record_repository(&self) -> Self::RecordRepository {
        MemoryRecordRepository {
            collections: Arc::clone(&self.collections),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryRecordRepository {
    collections: Arc<Mutex<Collections>>,
}

impl MemoryRecordRepository {
    fn lock(&self, kind: RecordKind) -> Result<MutexGuard<'_, Collections>, StorageError> {
        self.collections
            .lock()
            .map_err(|e| StorageError::Unavailable {
                kind,
                reason: e.to_string(),
            })
    }
}

impl RecordStorage for MemoryRecordRepository {
    fn load<R: Record>(&self) -> Result<Vec<R>, StorageError> {
        let mut collections = self.lock(R::KIND)?;
        let content = collections
            .entry(R::KIND)
            .or_insert_with(|| "[]".to_string());

        serde_json::from_str(content).map_err(|source| StorageError::Serialization {
            kind: R::KIND,
            path: "<memory>".into(),
            source,
        })
    }

    fn save<R: Record>(&self, records: &[R]) -> Result<(), StorageError> {
        let content =
            serde_json::to_string(records).map_err(|source| StorageError::Serialization {
                kind: R::KIND,
                path: "<memory>".into(),
                source,
            })?;

        self.lock(R::KIND)?.insert(R::KIND, content);
        Ok(())
    }

    fn initialize(&self) -> Result<(), StorageError> {
        for kind in RecordKind::ALL {
            self.lock(kind)?
                .entry(kind)
                .or_insert_with(|| "[]".to_string());
        }
        Ok(())
    }
}
