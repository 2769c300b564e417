use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::record_repository::RecordRepository;
use crate::storage::error::StorageError;
use crate::storage::traits::{Connection, RecordKind};

/// File names of the three collections inside the data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub invoices: String,
    pub transactions: String,
    pub inventory: String,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            invoices: "invoices.json".to_string(),
            transactions: "transactions.json".to_string(),
            inventory: "inventory.json".to_string(),
        }
    }
}

impl DataFiles {
    pub fn file_name(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Invoice => &self.invoices,
            RecordKind::Transaction => &self.transactions,
            RecordKind::Product => &self.inventory,
        }
    }
}

/// JsonConnection manages file paths and makes sure the collection files exist
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
    files: DataFiles,
}

impl JsonConnection {
    /// Create a new JSON connection with the default file names
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self, StorageError> {
        Self::with_files(base_directory, DataFiles::default())
    }

    /// Create a new JSON connection with custom file names
    pub fn with_files<P: AsRef<Path>>(
        base_directory: P,
        files: DataFiles,
    ) -> Result<Self, StorageError> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| StorageError::io(&base_path, e))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
            files,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn files(&self) -> &DataFiles {
        &self.files
    }

    /// Get the file path backing a collection
    pub fn file_path(&self, kind: RecordKind) -> PathBuf {
        self.base_directory.join(self.files.file_name(kind))
    }

    /// Ensure a collection file exists, initializing it to an empty array
    pub fn ensure_file_exists(&self, kind: RecordKind) -> Result<(), StorageError> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)
                .map_err(|e| StorageError::io(&self.base_directory, e))?;
        }

        let file_path = self.file_path(kind);
        if !file_path.exists() {
            fs::write(&file_path, "[]").map_err(|e| StorageError::io(&file_path, e))?;
            debug!("Initialized empty {} collection at {}", kind, file_path.display());
        }

        Ok(())
    }
}

impl Connection for JsonConnection {
    type RecordRepository = RecordRepository;

    fn create_record_repository(&self) -> Self::RecordRepository {
        RecordRepository::new(self.clone())
    }
}
