//! # Storage Module
//!
//! Handles all data persistence for the sales ledger.
//!
//! Every kind of record (invoices, transactions, products) lives in its own
//! collection. A collection is always read and written as a whole: services
//! load everything, transform it in memory and save everything back. There is
//! no locking, so the last writer wins.
//!
//! ## Backends
//!
//! - **json**: one pretty-printed JSON array file per kind inside a data
//!   directory. Writes go through a temp file and a rename so a failed write
//!   never truncates the previous data.
//! - **memory**: process-local collections for tests and throwaway sessions.
//!
//! Services never see a concrete backend; they are generic over
//! [`Connection`] and talk to the [`RecordStorage`] it creates.

pub mod error;
pub mod json;
pub mod memory;
pub mod traits;

pub use error::StorageError;
pub use json::{DataFiles, JsonConnection, RecordRepository};
pub use memory::{MemoryConnection, MemoryRecordRepository};
pub use traits::{next_id, Connection, Record, RecordKind, RecordStorage};
