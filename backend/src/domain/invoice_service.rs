//! Invoice service domain logic for the sales ledger.
use log::{info, warn};
use shared::Invoice;
use std::sync::Arc;

use crate::domain::commands::invoices::{CreateInvoiceCommand, InvoiceSearchQuery};
use crate::domain::errors::ServiceResult;
use crate::domain::search::{matches_keyword, DateRange};
use crate::domain::validation::{
    parse_non_negative_amount, require_text, resolve_timestamp, ValidationError,
};
use crate::storage::{next_id, Connection, RecordStorage};

#[derive(Clone)]
pub struct InvoiceService<C: Connection> {
    record_repository: C::RecordRepository,
}

impl<C: Connection> InvoiceService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let record_repository = connection.create_record_repository();
        Self { record_repository }
    }

    /// Append a new invoice and return it as stored
    pub fn add_invoice(&self, command: CreateInvoiceCommand) -> ServiceResult<Invoice> {
        let (customer, total, date) = Self::validate_create_command(&command)
            .inspect_err(|e| warn!("Rejected invoice: {}", e))?;

        let mut invoices: Vec<Invoice> = self.record_repository.load()?;
        let invoice = Invoice {
            id: next_id(&invoices)?,
            date,
            customer,
            total,
        };
        invoices.push(invoice.clone());
        self.record_repository.save(&invoices)?;

        info!(
            "Created invoice {} for '{}' ({:.2})",
            invoice.id, invoice.customer, invoice.total
        );
        Ok(invoice)
    }

    fn validate_create_command(
        command: &CreateInvoiceCommand,
    ) -> Result<(String, f64, String), ValidationError> {
        let customer = require_text("customer", &command.customer)?;
        let total = parse_non_negative_amount("total", &command.total)?;
        let date = resolve_timestamp(command.date.as_deref())?;
        Ok((customer, total, date))
    }

    pub fn list_invoices(&self) -> ServiceResult<Vec<Invoice>> {
        Ok(self.record_repository.load()?)
    }

    /// Invoices matching every non-empty criterion of the query, in stored order
    pub fn search_invoices(&self, query: InvoiceSearchQuery) -> ServiceResult<Vec<Invoice>> {
        let range = DateRange::new(query.start_date.as_deref(), query.end_date.as_deref());
        let keyword = query.keyword.as_deref();

        let invoices: Vec<Invoice> = self.record_repository.load()?;
        Ok(invoices
            .into_iter()
            .filter(|invoice| matches_keyword(&invoice.customer, keyword))
            .filter(|invoice| range.contains(&invoice.date))
            .collect())
    }
}
