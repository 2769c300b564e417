//! # IO Module
//!
//! The command-line surface of the ledger: argument parsing with clap and
//! plain-text rendering of records and summaries. Nothing here touches the
//! data files directly; every command goes through a domain service.

pub mod cli;
pub mod formatting;

pub use cli::{execute, Cli, Command};
pub use formatting::TableFormatter;
