use log::debug;
use std::fs;

use super::connection::JsonConnection;
use crate::storage::error::StorageError;
use crate::storage::traits::{Record, RecordKind, RecordStorage};

/// JSON file backed record repository
#[derive(Debug, Clone)]
pub struct RecordRepository {
    connection: JsonConnection,
}

impl RecordRepository {
    /// Create a new JSON record repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &JsonConnection {
        &self.connection
    }
}

impl RecordStorage for RecordRepository {
    fn load<R: Record>(&self) -> Result<Vec<R>, StorageError> {
        self.connection.ensure_file_exists(R::KIND)?;

        let file_path = self.connection.file_path(R::KIND);
        let content =
            fs::read_to_string(&file_path).map_err(|e| StorageError::io(&file_path, e))?;

        // A file truncated to nothing by an outside editor reads as an empty collection
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<R> =
            serde_json::from_str(&content).map_err(|source| StorageError::Serialization {
                kind: R::KIND,
                path: file_path.clone(),
                source,
            })?;

        debug!(
            "Loaded {} {} records from {}",
            records.len(),
            R::KIND,
            file_path.display()
        );
        Ok(records)
    }

    fn save<R: Record>(&self, records: &[R]) -> Result<(), StorageError> {
        let base_dir = self.connection.base_directory();
        if !base_dir.exists() {
            fs::create_dir_all(base_dir).map_err(|e| StorageError::io(base_dir, e))?;
        }

        let file_path = self.connection.file_path(R::KIND);
        let json_content =
            serde_json::to_string_pretty(records).map_err(|source| StorageError::Serialization {
                kind: R::KIND,
                path: file_path.clone(),
                source,
            })?;

        // Atomic write: temp file first, then rename over the collection
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, json_content).map_err(|e| StorageError::io(&temp_path, e))?;
        fs::rename(&temp_path, &file_path).map_err(|e| StorageError::io(&file_path, e))?;

        debug!(
            "Saved {} {} records to {}",
            records.len(),
            R::KIND,
            file_path.display()
        );
        Ok(())
    }

    fn initialize(&self) -> Result<(), StorageError> {
        for kind in RecordKind::ALL {
            self.connection.ensure_file_exists(kind)?;
        }
        Ok(())
    }
}
