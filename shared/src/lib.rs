use serde::{Deserialize, Serialize};
use std::fmt;

/// Format of every stored `date` field.
///
/// Fixed width and zero padded, so comparing two timestamps as strings gives
/// the same answer as comparing them chronologically. Date range searches
/// depend on this.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time rendered with [`TIMESTAMP_FORMAT`]
pub fn current_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Upper bound used for an inclusive end-of-day comparison ("2024-03-01" -> "2024-03-01 23:59:59")
pub fn end_of_day_bound(date: &str) -> String {
    format!("{} 23:59:59", date)
}

/// A sales invoice as persisted in `invoices.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Sequential identifier, max(existing) + 1 at creation
    pub id: u64,
    /// Creation timestamp ("YYYY-MM-DD HH:MM:SS", local time)
    pub date: String,
    /// Customer name (never empty)
    pub customer: String,
    /// Invoice total (never negative)
    pub total: f64,
}

/// An accounting transaction as persisted in `transactions.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequential identifier, max(existing) + 1 at creation
    pub id: u64,
    /// Creation timestamp ("YYYY-MM-DD HH:MM:SS", local time)
    pub date: String,
    /// Free-text type as entered ("Thu", "Chi", "income", ...)
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// Transaction amount
    pub amount: f64,
    /// What the money was for
    pub description: String,
}

impl Transaction {
    /// Classify the free-text type of this transaction
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::classify(&self.transaction_type)
    }
}

/// A stocked product as persisted in `inventory.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub quantity: u64,
    /// Unit price
    pub price: f64,
}

impl Product {
    /// Stock value of this line (quantity x unit price)
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}

/// How a transaction counts towards the accounting summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money received ("income" or "Thu")
    Income,
    /// Money spent ("expense" or "Chi")
    Expense,
    /// Anything else; excluded from both totals
    Other,
}

impl TransactionKind {
    /// Case-insensitive classification of a stored type label
    pub fn classify(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "income" | "thu" => TransactionKind::Income,
            "expense" | "chi" => TransactionKind::Expense,
            _ => TransactionKind::Other,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
            TransactionKind::Other => write!(f, "other"),
        }
    }
}

/// Sign of an amount for styling and display
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AmountType {
    Positive,
    Negative,
    Zero,
}

impl AmountType {
    pub fn of(amount: f64) -> Self {
        if amount > 0.0 {
            AmountType::Positive
        } else if amount < 0.0 {
            AmountType::Negative
        } else {
            AmountType::Zero
        }
    }
}

/// Stock totals over every product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySummary {
    /// Wider than a single quantity so summing many full stocks cannot overflow
    pub total_quantity: u128,
    pub total_value: f64,
}

/// Sales totals over every invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_sales: f64,
    pub invoice_count: usize,
}

/// Income and expense totals over every classified transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountingSummary {
    pub income: f64,
    pub expense: f64,
}

impl AccountingSummary {
    /// Income minus expense
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }

    /// True when the balance is zero or positive
    pub fn is_surplus(&self) -> bool {
        self.balance() >= 0.0
    }

    pub fn balance_type(&self) -> AmountType {
        AmountType::of(self.balance())
    }
}

/// Everything the statistics view shows at once
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub inventory: InventorySummary,
    pub sales: SalesSummary,
    pub accounting: AccountingSummary,
}
