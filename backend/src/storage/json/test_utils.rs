/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// This module provides RAII-based cleanup that guarantees test data is removed
/// even if tests panic or fail.
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::connection::JsonConnection;
use super::record_repository::RecordRepository;
use crate::storage::traits::RecordKind;

/// RAII test environment; the temp directory is removed when it is dropped
pub struct TestEnvironment {
    /// Kept alive until drop
    _temp_dir: TempDir,
    pub connection: JsonConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// Raw contents of a collection file
    pub fn read_collection(&self, kind: RecordKind) -> String {
        fs::read_to_string(self.connection.file_path(kind)).unwrap_or_default()
    }

    /// Overwrite a collection file with raw text
    pub fn write_collection(&self, kind: RecordKind, content: &str) {
        fs::write(self.connection.file_path(kind), content)
            .expect("Failed to write test collection");
    }
}

/// Repository test helper with automatic cleanup
pub struct RepositoryTestHelper {
    pub env: TestEnvironment,
    pub repository: RecordRepository,
}

impl RepositoryTestHelper {
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let repository = RecordRepository::new(env.connection.clone());

        Ok(RepositoryTestHelper { env, repository })
    }
}
