//! # Storage Traits
//!
//! Storage abstraction that lets services work against JSON files or memory
//! without knowing which one they have.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{Invoice, Product, Transaction};
use std::fmt;

use super::error::StorageError;

/// Which collection an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Invoice,
    Transaction,
    Product,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [
        RecordKind::Invoice,
        RecordKind::Transaction,
        RecordKind::Product,
    ];
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Invoice => write!(f, "invoice"),
            RecordKind::Transaction => write!(f, "transaction"),
            RecordKind::Product => write!(f, "product"),
        }
    }
}

/// A flat record that belongs to exactly one collection
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Collection this record type is stored in
    const KIND: RecordKind;

    fn id(&self) -> u64;
}

impl Record for Invoice {
    const KIND: RecordKind = RecordKind::Invoice;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Transaction {
    const KIND: RecordKind = RecordKind::Transaction;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Product {
    const KIND: RecordKind = RecordKind::Product;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Next free identifier: max(existing ids, default 0) + 1.
///
/// Unlike `len() + 1`, this never hands out an id that is still in use after
/// an earlier record was deleted. Fails once a record holds `u64::MAX`.
pub fn next_id<R: Record>(records: &[R]) -> Result<u64, StorageError> {
    let max_id = records.iter().map(Record::id).max().unwrap_or(0);
    max_id
        .checked_add(1)
        .ok_or(StorageError::IdsExhausted { kind: R::KIND, max_id })
}

/// Trait defining whole-collection persistence
///
/// `load` returns the records in stored order. A collection that has never
/// been written is created empty on first access. `save` replaces the whole
/// collection.
pub trait RecordStorage: Send + Sync {
    /// Load every record of `R`'s kind
    fn load<R: Record>(&self) -> Result<Vec<R>, StorageError>;

    /// Replace the stored collection of `R`'s kind
    fn save<R: Record>(&self, records: &[R]) -> Result<(), StorageError>;

    /// Make sure every collection exists, creating missing ones empty
    fn initialize(&self) -> Result<(), StorageError>;
}

/// Trait defining the interface for storage connections
///
/// Abstracts the backing medium and hands out repositories, so the domain
/// layer can be built on any backend.
pub trait Connection: Send + Sync + Clone {
    /// The type of RecordStorage this connection creates
    type RecordRepository: RecordStorage + Clone;

    /// Create a new record repository for this connection
    fn create_record_repository(&self) -> Self::RecordRepository;
}
