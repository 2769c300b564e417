use misa_backend::domain::commands::invoices::{CreateInvoiceCommand, InvoiceSearchQuery};
use misa_backend::domain::commands::products::{CreateProductCommand, UpdateProductCommand};
use misa_backend::domain::commands::transactions::{
    CreateTransactionCommand, TransactionSearchQuery,
};
use misa_backend::{AppConfig, Backend};
use std::fs;
use tempfile::TempDir;

fn invoice(customer: &str, total: &str, date: &str) -> CreateInvoiceCommand {
    CreateInvoiceCommand {
        customer: customer.to_string(),
        total: total.to_string(),
        date: Some(date.to_string()),
    }
}

fn transaction(transaction_type: &str, amount: &str, description: &str) -> CreateTransactionCommand {
    CreateTransactionCommand {
        transaction_type: transaction_type.to_string(),
        amount: amount.to_string(),
        description: description.to_string(),
        date: None,
    }
}

#[test]
fn ledger_survives_reopening() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig::default();

    {
        let backend = Backend::open(temp_dir.path(), &config).unwrap();
        backend
            .invoice_service
            .add_invoice(invoice("Alice Corp", "150000", "2024-01-15 10:30:00"))
            .unwrap();
        backend
            .invoice_service
            .add_invoice(invoice("Bob Ltd", "50000", "2024-02-01 09:00:00"))
            .unwrap();
        backend.transaction_service.add_transaction(transaction("Thu", "100", "Cash sale")).unwrap();
        backend.transaction_service.add_transaction(transaction("Chi", "40", "Shop rent")).unwrap();
        backend
            .inventory_service
            .add_product(CreateProductCommand {
                name: "Pen".to_string(),
                quantity: "100".to_string(),
                price: "3000".to_string(),
            })
            .unwrap();
    }

    let backend = Backend::open(temp_dir.path(), &config).unwrap();

    let january = backend
        .invoice_service
        .search_invoices(InvoiceSearchQuery {
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-01-31".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(january.len(), 1);
    assert_eq!(january[0].customer, "Alice Corp");

    let rent = backend
        .transaction_service
        .search_transactions(TransactionSearchQuery {
            keyword: Some("RENT".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(rent.len(), 1);
    assert_eq!(rent[0].transaction_type, "Chi");

    let dashboard = backend.summary_service.dashboard().unwrap();
    assert_eq!(dashboard.sales.total_sales, 200000.0);
    assert_eq!(dashboard.sales.invoice_count, 2);
    assert_eq!(dashboard.inventory.total_quantity, 100);
    assert_eq!(dashboard.inventory.total_value, 300000.0);
    assert_eq!(dashboard.accounting.balance(), 60.0);
    assert!(dashboard.accounting.is_surplus());
}

#[test]
fn stored_files_use_flat_records() {
    let temp_dir = TempDir::new().unwrap();
    let backend = Backend::open(temp_dir.path(), &AppConfig::default()).unwrap();

    backend.transaction_service.add_transaction(transaction("income", "25.5", "Refund")).unwrap();

    let raw = fs::read_to_string(temp_dir.path().join("transactions.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &records[0];
    assert_eq!(record["id"], 1);
    assert_eq!(record["type"], "income");
    assert_eq!(record["amount"], 25.5);
    assert_eq!(record["description"], "Refund");
    assert!(record["date"].as_str().unwrap().len() == "2024-01-15 10:30:00".len());
}

#[test]
fn rejected_input_leaves_files_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let backend = Backend::open(temp_dir.path(), &AppConfig::default()).unwrap();
    backend
        .inventory_service
        .add_product(CreateProductCommand {
            name: "Pen".to_string(),
            quantity: "10".to_string(),
            price: "3000".to_string(),
        })
        .unwrap();
    let inventory_path = temp_dir.path().join("inventory.json");
    let invoices_path = temp_dir.path().join("invoices.json");
    let inventory_before = fs::read(&inventory_path).unwrap();
    let invoices_before = fs::read(&invoices_path).unwrap();

    assert!(backend
        .inventory_service
        .update_product(UpdateProductCommand {
            product_id: 1,
            quantity: Some("ten".to_string()),
            ..Default::default()
        })
        .is_err());
    assert!(backend
        .invoice_service
        .add_invoice(invoice("  ", "100", "2024-01-15 10:30:00"))
        .is_err());

    assert_eq!(fs::read(&inventory_path).unwrap(), inventory_before);
    assert_eq!(fs::read(&invoices_path).unwrap(), invoices_before);
}

#[test]
fn malformed_file_is_reported_and_kept() {
    let temp_dir = TempDir::new().unwrap();
    let backend = Backend::open(temp_dir.path(), &AppConfig::default()).unwrap();
    let invoices_path = temp_dir.path().join("invoices.json");
    fs::write(&invoices_path, "{not json").unwrap();

    let result = backend
        .invoice_service
        .add_invoice(invoice("Alice Corp", "100", "2024-01-15 10:30:00"));

    let err = result.unwrap_err();
    assert!(!err.is_validation());
    assert!(err.to_string().contains("malformed invoice data"));
    assert_eq!(fs::read_to_string(&invoices_path).unwrap(), "{not json");
}
