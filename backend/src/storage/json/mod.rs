//! # JSON Storage Module
//!
//! File-based storage: one JSON array per record kind inside a single data
//! directory.
//!
//! ## File Structure
//!
//! ```text
//! data/
//! ├── settings.yaml
//! ├── invoices.json
//! ├── transactions.json
//! └── inventory.json
//! ```
//!
//! ## File Format
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "date": "2024-01-15 10:30:00",
//!     "customer": "Alice Corp",
//!     "total": 150000.0
//!   }
//! ]
//! ```

pub mod connection;
pub mod record_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::{DataFiles, JsonConnection};
pub use record_repository::RecordRepository;
