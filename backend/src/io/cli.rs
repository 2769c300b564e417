//! Command-line arguments and dispatch.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::debug;
use std::io::Write;
use std::path::PathBuf;

use crate::config::DATA_DIR_ENV;
use crate::domain::commands::invoices::{CreateInvoiceCommand, InvoiceSearchQuery};
use crate::domain::commands::products::{
    CreateProductCommand, ProductSearchQuery, UpdateProductCommand,
};
use crate::domain::commands::transactions::{CreateTransactionCommand, TransactionSearchQuery};
use crate::io::formatting::TableFormatter;
use crate::storage::Connection;
use crate::Backend;

#[derive(Debug, Parser)]
#[command(name = "misa", version, about = "Sales ledger: invoices, income/expense and inventory")]
pub struct Cli {
    /// Directory holding the JSON data files
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Settings file (defaults to settings.yaml in the data directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the settings file and any missing data files
    Init,
    /// Sales invoices
    #[command(subcommand)]
    Invoice(InvoiceCommand),
    /// Income and expense entries
    #[command(subcommand)]
    Transaction(TransactionCommand),
    /// Products in stock
    #[command(subcommand)]
    Product(ProductCommand),
    /// Inventory, sales and accounting totals
    Summary,
}

#[derive(Debug, Subcommand)]
pub enum InvoiceCommand {
    Add {
        #[arg(long)]
        customer: String,
        #[arg(long, allow_hyphen_values = true)]
        total: String,
        /// Timestamp override, "YYYY-MM-DD HH:MM:SS"
        #[arg(long)]
        date: Option<String>,
    },
    List,
    Search {
        /// Substring of the customer name
        #[arg(long)]
        keyword: Option<String>,
        #[command(flatten)]
        range: DateRangeArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum TransactionCommand {
    Add {
        /// Free text; "Thu"/"income" and "Chi"/"expense" count in the summary
        #[arg(long = "type")]
        transaction_type: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        date: Option<String>,
    },
    List,
    Search {
        #[arg(long = "type")]
        transaction_type: Option<String>,
        /// Substring of the description
        #[arg(long)]
        keyword: Option<String>,
        #[command(flatten)]
        range: DateRangeArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        quantity: String,
        #[arg(long, allow_hyphen_values = true)]
        price: String,
    },
    Update {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,
    },
    Delete {
        id: u64,
    },
    List,
    Search {
        #[arg(long)]
        keyword: Option<String>,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct DateRangeArgs {
    /// First day to include, "YYYY-MM-DD"
    #[arg(long = "from")]
    pub start_date: Option<String>,
    /// Last day to include, "YYYY-MM-DD"
    #[arg(long = "to")]
    pub end_date: Option<String>,
}

/// Run one command against `backend`, writing the result to `out`.
pub fn execute<C, W>(
    backend: &Backend<C>,
    command: Command,
    formatter: &TableFormatter,
    out: &mut W,
) -> Result<()>
where
    C: Connection,
    W: Write,
{
    debug!("Executing {:?}", command);

    match command {
        Command::Init => {
            backend.initialize()?;
            writeln!(out, "Data files ready")?;
        }
        Command::Invoice(command) => execute_invoice(backend, command, formatter, out)?,
        Command::Transaction(command) => execute_transaction(backend, command, formatter, out)?,
        Command::Product(command) => execute_product(backend, command, formatter, out)?,
        Command::Summary => {
            let summary = backend.summary_service.dashboard()?;
            writeln!(out, "{}", formatter.dashboard(&summary))?;
        }
    }
    Ok(())
}

fn execute_invoice<C: Connection, W: Write>(
    backend: &Backend<C>,
    command: InvoiceCommand,
    formatter: &TableFormatter,
    out: &mut W,
) -> Result<()> {
    match command {
        InvoiceCommand::Add { customer, total, date } => {
            let invoice = backend
                .invoice_service
                .add_invoice(CreateInvoiceCommand { customer, total, date })?;
            writeln!(
                out,
                "Added invoice {} for {} ({})",
                invoice.id,
                invoice.customer,
                formatter.format_amount(invoice.total)
            )?;
        }
        InvoiceCommand::List => {
            let invoices = backend.invoice_service.list_invoices()?;
            writeln!(out, "{}", formatter.invoice_table(&invoices))?;
        }
        InvoiceCommand::Search { keyword, range } => {
            let invoices = backend.invoice_service.search_invoices(InvoiceSearchQuery {
                keyword,
                start_date: range.start_date,
                end_date: range.end_date,
            })?;
            writeln!(out, "{}", formatter.invoice_table(&invoices))?;
        }
    }
    Ok(())
}

fn execute_transaction<C: Connection, W: Write>(
    backend: &Backend<C>,
    command: TransactionCommand,
    formatter: &TableFormatter,
    out: &mut W,
) -> Result<()> {
    match command {
        TransactionCommand::Add {
            transaction_type,
            amount,
            description,
            date,
        } => {
            let transaction = backend
                .transaction_service
                .add_transaction(CreateTransactionCommand {
                    transaction_type,
                    amount,
                    description,
                    date,
                })?;
            writeln!(
                out,
                "Added transaction {} ({} {})",
                transaction.id,
                transaction.transaction_type,
                formatter.format_amount(transaction.amount)
            )?;
        }
        TransactionCommand::List => {
            let transactions = backend.transaction_service.list_transactions()?;
            writeln!(out, "{}", formatter.transaction_table(&transactions))?;
        }
        TransactionCommand::Search {
            transaction_type,
            keyword,
            range,
        } => {
            let transactions =
                backend
                    .transaction_service
                    .search_transactions(TransactionSearchQuery {
                        transaction_type,
                        keyword,
                        start_date: range.start_date,
                        end_date: range.end_date,
                    })?;
            writeln!(out, "{}", formatter.transaction_table(&transactions))?;
        }
    }
    Ok(())
}

fn execute_product<C: Connection, W: Write>(
    backend: &Backend<C>,
    command: ProductCommand,
    formatter: &TableFormatter,
    out: &mut W,
) -> Result<()> {
    match command {
        ProductCommand::Add { name, quantity, price } => {
            let product = backend
                .inventory_service
                .add_product(CreateProductCommand { name, quantity, price })?;
            writeln!(out, "Added product {} '{}'", product.id, product.name)?;
        }
        ProductCommand::Update {
            id,
            name,
            quantity,
            price,
        } => {
            let result = backend.inventory_service.update_product(UpdateProductCommand {
                product_id: id,
                name,
                quantity,
                price,
            })?;
            match result.product {
                Some(product) => writeln!(out, "{}", formatter.product_table(&[product]))?,
                None => writeln!(out, "No product with id {}", id)?,
            }
        }
        ProductCommand::Delete { id } => {
            if backend.inventory_service.delete_product(id)?.deleted {
                writeln!(out, "Deleted product {}", id)?;
            } else {
                writeln!(out, "No product with id {}", id)?;
            }
        }
        ProductCommand::List => {
            let products = backend.inventory_service.list_products()?;
            writeln!(out, "{}", formatter.product_table(&products))?;
        }
        ProductCommand::Search { keyword } => {
            let products = backend
                .inventory_service
                .search_products(ProductSearchQuery { keyword })?;
            writeln!(out, "{}", formatter.product_table(&products))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceError;
    use crate::storage::{MemoryConnection, RecordStorage};
    use std::sync::Arc;

    fn create_test_backend() -> Backend<MemoryConnection> {
        Backend::new(Arc::new(MemoryConnection::new()))
    }

    fn run(backend: &Backend<MemoryConnection>, args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("misa").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        execute(backend, cli.command, &TableFormatter::new("VND"), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_parse_global_options() {
        let cli = Cli::try_parse_from([
            "misa",
            "invoice",
            "search",
            "--keyword",
            "alice",
            "--from",
            "2024-01-01",
            "--data-dir",
            "/tmp/ledger",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/ledger")));
        match cli.command {
            Command::Invoice(InvoiceCommand::Search { keyword, range }) => {
                assert_eq!(keyword.as_deref(), Some("alice"));
                assert_eq!(range.start_date.as_deref(), Some("2024-01-01"));
                assert_eq!(range.end_date, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_invoice_add_and_list() {
        let backend = create_test_backend();

        let added = run(&backend, &["invoice", "add", "--customer", "Alice Corp", "--total", "1250000"]).unwrap();
        assert_eq!(added.trim(), "Added invoice 1 for Alice Corp (1,250,000 VND)");

        let listed = run(&backend, &["invoice", "list"]).unwrap();
        assert!(listed.contains("Alice Corp"));
        assert!(listed.contains("1,250,000 VND"));
    }

    #[test]
    fn test_validation_error_is_returned() {
        let backend = create_test_backend();

        let err = run(&backend, &["invoice", "add", "--customer", "Alice", "--total", "-5"]).unwrap_err();
        let service_error = err.downcast_ref::<ServiceError>().unwrap();
        assert!(service_error.is_validation());
        assert!(backend.invoice_service.list_invoices().unwrap().is_empty());
    }

    #[test]
    fn test_transaction_search_by_type() {
        let backend = create_test_backend();
        run(&backend, &["transaction", "add", "--type", "Thu", "--amount", "100", "--description", "Sale"]).unwrap();
        run(&backend, &["transaction", "add", "--type", "Chi", "--amount", "40", "--description", "Rent"]).unwrap();

        let found = run(&backend, &["transaction", "search", "--type", "thu"]).unwrap();
        assert!(found.contains("Sale"));
        assert!(!found.contains("Rent"));
    }

    #[test]
    fn test_product_lifecycle() {
        let backend = create_test_backend();
        run(&backend, &["product", "add", "--name", "Pen", "--quantity", "10", "--price", "3000"]).unwrap();

        let updated = run(&backend, &["product", "update", "1", "--quantity", "4"]).unwrap();
        assert!(updated.contains("Pen"));
        assert!(updated.contains("3,000 VND"));

        let missing = run(&backend, &["product", "update", "9", "--name", "Ghost"]).unwrap();
        assert_eq!(missing.trim(), "No product with id 9");

        assert_eq!(run(&backend, &["product", "delete", "1"]).unwrap().trim(), "Deleted product 1");
        assert_eq!(run(&backend, &["product", "delete", "1"]).unwrap().trim(), "No product with id 1");
    }

    #[test]
    fn test_summary_output() {
        let backend = create_test_backend();
        run(&backend, &["product", "add", "--name", "Pen", "--quantity", "10", "--price", "3000"]).unwrap();
        run(&backend, &["transaction", "add", "--type", "Thu", "--amount", "100", "--description", "Sale"]).unwrap();
        run(&backend, &["transaction", "add", "--type", "Chi", "--amount", "40", "--description", "Rent"]).unwrap();

        let summary = run(&backend, &["summary"]).unwrap();
        let line = |label: &str| summary.lines().find(|l| l.contains(label)).unwrap().to_string();
        assert!(line("Total quantity").contains(" 10 "));
        assert!(line("Total value").contains("30,000 VND"));
        assert!(line("Balance").contains("60 VND (surplus)"));
    }

    #[test]
    fn test_init_creates_collections() {
        let backend = create_test_backend();
        assert_eq!(run(&backend, &["init"]).unwrap().trim(), "Data files ready");

        let products: Vec<shared::Product> = backend.record_repository().load().unwrap();
        assert!(products.is_empty());
    }
}
