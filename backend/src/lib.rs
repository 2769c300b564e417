//! # Misa Backend
//!
//! Storage, business rules and the command-line surface of the Misa sales
//! ledger. Everything is synchronous: each operation loads a whole
//! collection, changes it in memory and writes it back.
//!
//! ## Layers
//!
//! - **storage**: JSON-file and in-memory record stores behind the
//!   [`Connection`](storage::Connection) trait
//! - **domain**: invoice, transaction, inventory and summary services
//! - **config**: `settings.yaml` and data directory resolution
//! - **io**: clap commands and table formatting used by the `misa` binary

use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

pub use config::AppConfig;
pub use storage::{JsonConnection, MemoryConnection};

use domain::{InventoryService, InvoiceService, ServiceResult, SummaryService, TransactionService};
use storage::{Connection, RecordStorage};

/// Main backend struct that wires every service to one connection
pub struct Backend<C: Connection> {
    connection: Arc<C>,
    pub invoice_service: InvoiceService<C>,
    pub transaction_service: TransactionService<C>,
    pub inventory_service: InventoryService<C>,
    pub summary_service: SummaryService<C>,
}

impl<C: Connection> Backend<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            invoice_service: InvoiceService::new(connection.clone()),
            transaction_service: TransactionService::new(connection.clone()),
            inventory_service: InventoryService::new(connection.clone()),
            summary_service: SummaryService::new(connection.clone()),
            connection,
        }
    }

    /// Create an empty collection for every kind that has none yet
    pub fn initialize(&self) -> ServiceResult<()> {
        self.record_repository().initialize()?;
        Ok(())
    }

    pub fn record_repository(&self) -> C::RecordRepository {
        self.connection.create_record_repository()
    }
}

impl Backend<JsonConnection> {
    /// Open the JSON files in `data_directory` named by `config`, creating
    /// the directory and any missing files.
    pub fn open(data_directory: &Path, config: &AppConfig) -> Result<Self> {
        let connection = JsonConnection::with_files(data_directory, config.data_files())
            .with_context(|| format!("Failed to open data directory {}", data_directory.display()))?;
        let backend = Self::new(Arc::new(connection));
        backend.initialize()?;

        info!("Opened ledger in {:?}", data_directory);
        Ok(backend)
    }
}
