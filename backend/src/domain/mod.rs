//! # Domain Module
//!
//! Business logic for the sales ledger. Services here know nothing about the
//! command line or the file format; they work against any
//! [`Connection`](crate::storage::Connection).
//!
//! ## Module Organization
//!
//! - **invoice_service**: record sales invoices, search by customer and date
//! - **transaction_service**: record income/expense entries, search by type, description and date
//! - **inventory_service**: product CRUD and name search
//! - **summary_service**: inventory, sales and accounting totals
//!
//! ## Business Rules
//!
//! - Every mutation is load everything, change in memory, save everything
//! - Input is validated before anything is loaded, so a rejected request never writes
//! - New ids are max(existing) + 1 for every record kind
//! - Date filters compare "YYYY-MM-DD HH:MM:SS" strings; the end date covers its whole day

pub mod commands;
pub mod errors;
pub mod inventory_service;
pub mod invoice_service;
pub mod search;
pub mod summary_service;
pub mod transaction_service;
pub mod validation;

pub use errors::{ServiceError, ServiceResult};
pub use inventory_service::InventoryService;
pub use invoice_service::InvoiceService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;
pub use validation::ValidationError;
