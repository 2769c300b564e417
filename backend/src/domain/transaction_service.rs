//! Transaction service domain logic for the sales ledger.
use log::{info, warn};
use shared::Transaction;
use std::sync::Arc;

use crate::domain::commands::transactions::{CreateTransactionCommand, TransactionSearchQuery};
use crate::domain::errors::ServiceResult;
use crate::domain::search::{matches_exact, matches_keyword, DateRange};
use crate::domain::validation::{parse_amount, require_text, resolve_timestamp, ValidationError};
use crate::storage::{next_id, Connection, RecordStorage};

#[derive(Clone)]
pub struct TransactionService<C: Connection> {
    record_repository: C::RecordRepository,
}

impl<C: Connection> TransactionService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let record_repository = connection.create_record_repository();
        Self { record_repository }
    }

    pub fn add_transaction(&self, command: CreateTransactionCommand) -> ServiceResult<Transaction> {
        let validated = Self::validate_create_command(&command)
            .inspect_err(|e| warn!("Rejected transaction: {}", e))?;

        let mut transactions: Vec<Transaction> = self.record_repository.load()?;
        let transaction = Transaction {
            id: next_id(&transactions)?,
            ..validated
        };
        transactions.push(transaction.clone());
        self.record_repository.save(&transactions)?;

        info!(
            "Created transaction {} ({}, {:.2}): {}",
            transaction.id, transaction.transaction_type, transaction.amount, transaction.description
        );
        Ok(transaction)
    }

    /// Validated fields of a new transaction; the id is filled in once the collection is loaded
    fn validate_create_command(
        command: &CreateTransactionCommand,
    ) -> Result<Transaction, ValidationError> {
        Ok(Transaction {
            id: 0,
            transaction_type: require_text("type", &command.transaction_type)?,
            amount: parse_amount("amount", &command.amount)?,
            description: require_text("description", &command.description)?,
            date: resolve_timestamp(command.date.as_deref())?,
        })
    }

    pub fn list_transactions(&self) -> ServiceResult<Vec<Transaction>> {
        Ok(self.record_repository.load()?)
    }

    /// Transactions matching every non-empty criterion of the query, in stored order
    pub fn search_transactions(
        &self,
        query: TransactionSearchQuery,
    ) -> ServiceResult<Vec<Transaction>> {
        let range = DateRange::new(query.start_date.as_deref(), query.end_date.as_deref());
        let transaction_type = query.transaction_type.as_deref();
        let keyword = query.keyword.as_deref();

        let transactions: Vec<Transaction> = self.record_repository.load()?;
        Ok(transactions
            .into_iter()
            .filter(|t| matches_exact(&t.transaction_type, transaction_type))
            .filter(|t| matches_keyword(&t.description, keyword))
            .filter(|t| range.contains(&t.date))
            .collect())
    }
}
