//! Aggregate statistics over the stored collections.
//!
//! Every summary is a fold over a freshly loaded collection; nothing is cached.

use log::debug;
use shared::{
    AccountingSummary, DashboardSummary, InventorySummary, Invoice, Product, SalesSummary,
    Transaction, TransactionKind,
};
use std::sync::Arc;

use crate::domain::errors::ServiceResult;
use crate::storage::{Connection, RecordStorage};

#[derive(Clone)]
pub struct SummaryService<C: Connection> {
    record_repository: C::RecordRepository,
}

impl<C: Connection> SummaryService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let record_repository = connection.create_record_repository();
        Self { record_repository }
    }

    /// Total units in stock and their total value
    pub fn inventory_summary(&self) -> ServiceResult<InventorySummary> {
        let products: Vec<Product> = self.record_repository.load()?;
        Ok(InventorySummary {
            total_quantity: products.iter().map(|p| u128::from(p.quantity)).sum(),
            total_value: products.iter().map(Product::stock_value).sum(),
        })
    }

    pub fn sales_summary(&self) -> ServiceResult<SalesSummary> {
        let invoices: Vec<Invoice> = self.record_repository.load()?;
        Ok(SalesSummary {
            total_sales: invoices.iter().map(|i| i.total).sum(),
            invoice_count: invoices.len(),
        })
    }

    /// Income and expense totals.
    ///
    /// Transactions whose type is neither income nor expense are left out of
    /// both totals.
    pub fn accounting_summary(&self) -> ServiceResult<AccountingSummary> {
        let transactions: Vec<Transaction> = self.record_repository.load()?;

        let summary = transactions
            .iter()
            .fold(AccountingSummary::default(), |mut acc, t| {
                match t.kind() {
                    TransactionKind::Income => acc.income += t.amount,
                    TransactionKind::Expense => acc.expense += t.amount,
                    TransactionKind::Other => {
                        debug!(
                            "Transaction {} has unrecognized type '{}', excluded from totals",
                            t.id, t.transaction_type
                        );
                    }
                }
                acc
            });
        Ok(summary)
    }

    pub fn dashboard(&self) -> ServiceResult<DashboardSummary> {
        Ok(DashboardSummary {
            inventory: self.inventory_summary()?,
            sales: self.sales_summary()?,
            accounting: self.accounting_summary()?,
        })
    }
}
