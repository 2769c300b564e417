//! Table and amount formatting for terminal output.
//!
//! Amounts are shown the way the ledger has always shown them: rounded to
//! whole units, thousands separated by commas, followed by the currency
//! suffix ("1,250,000 VND").

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use shared::{AmountType, DashboardSummary, Invoice, Product, Transaction};

#[derive(Debug, Clone, PartialEq)]
pub struct TableFormatter {
    currency_suffix: String,
}

impl TableFormatter {
    pub fn new(currency_suffix: impl Into<String>) -> Self {
        Self {
            currency_suffix: currency_suffix.into(),
        }
    }

    pub fn format_amount(&self, amount: f64) -> String {
        let digits = format!("{:.0}", amount.abs());
        let grouped = group_thousands(&digits);
        let sign = if amount < 0.0 && digits != "0" { "-" } else { "" };

        if self.currency_suffix.is_empty() {
            format!("{}{}", sign, grouped)
        } else {
            format!("{}{} {}", sign, grouped, self.currency_suffix)
        }
    }

    pub fn invoice_table(&self, invoices: &[Invoice]) -> String {
        let mut table = Table::new();
        table.set_header(vec!["ID", "Date", "Customer", "Total"]);
        for invoice in invoices {
            table.add_row(vec![
                Cell::new(invoice.id),
                Cell::new(&invoice.date),
                Cell::new(&invoice.customer),
                Cell::new(self.format_amount(invoice.total)).set_alignment(CellAlignment::Right),
            ]);
        }
        table.to_string()
    }

    pub fn transaction_table(&self, transactions: &[Transaction]) -> String {
        let mut table = Table::new();
        table.set_header(vec!["ID", "Date", "Type", "Amount", "Description"]);
        for transaction in transactions {
            table.add_row(vec![
                Cell::new(transaction.id),
                Cell::new(&transaction.date),
                Cell::new(&transaction.transaction_type),
                self.signed_amount_cell(transaction.amount),
                Cell::new(&transaction.description),
            ]);
        }
        table.to_string()
    }

    pub fn product_table(&self, products: &[Product]) -> String {
        let mut table = Table::new();
        table.set_header(vec!["ID", "Name", "Quantity", "Price"]);
        for product in products {
            table.add_row(vec![
                Cell::new(product.id),
                Cell::new(&product.name),
                Cell::new(product.quantity).set_alignment(CellAlignment::Right),
                Cell::new(self.format_amount(product.price)).set_alignment(CellAlignment::Right),
            ]);
        }
        table.to_string()
    }

    /// Inventory, sales and accounting totals as one two-column table
    pub fn dashboard(&self, summary: &DashboardSummary) -> String {
        let accounting = &summary.accounting;
        let balance = accounting.balance();
        let balance_text = match accounting.balance_type() {
            AmountType::Positive => format!("{} (surplus)", self.format_amount(balance)),
            AmountType::Negative => format!("{} (deficit)", self.format_amount(balance)),
            AmountType::Zero => self.format_amount(balance),
        };

        let mut table = Table::new();
        table.set_header(vec!["Summary", "Value"]);
        table.add_row(vec![
            Cell::new("Total quantity"),
            Cell::new(summary.inventory.total_quantity),
        ]);
        table.add_row(vec![
            Cell::new("Total value"),
            Cell::new(self.format_amount(summary.inventory.total_value)),
        ]);
        table.add_row(vec![
            Cell::new("Invoices"),
            Cell::new(summary.sales.invoice_count),
        ]);
        table.add_row(vec![
            Cell::new("Total sales"),
            Cell::new(self.format_amount(summary.sales.total_sales)),
        ]);
        table.add_row(vec![
            Cell::new("Income"),
            Cell::new(self.format_amount(accounting.income)),
        ]);
        table.add_row(vec![
            Cell::new("Expense"),
            Cell::new(self.format_amount(accounting.expense)),
        ]);
        table.add_row(vec![
            Cell::new("Balance").add_attribute(Attribute::Bold),
            balance_cell(balance_text, accounting.balance_type()).add_attribute(Attribute::Bold),
        ]);
        table.to_string()
    }

    fn signed_amount_cell(&self, amount: f64) -> Cell {
        balance_cell(self.format_amount(amount), AmountType::of(amount))
            .set_alignment(CellAlignment::Right)
    }
}

/// Green for money in, red for money out
fn balance_cell(text: String, amount_type: AmountType) -> Cell {
    match amount_type {
        AmountType::Positive => Cell::new(text).fg(Color::Rgb { r: 4, g: 120, b: 87 }),
        AmountType::Negative => Cell::new(text).fg(Color::Rgb { r: 185, g: 28, b: 28 }),
        AmountType::Zero => Cell::new(text),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
