//! Domain-level command and query types
//!
//! Numeric fields arrive as the text the user typed; services parse and
//! validate them so a bad value is rejected before anything is loaded or
//! written.

pub mod invoices {
    /// Input for creating a new invoice.
    #[derive(Debug, Clone)]
    pub struct CreateInvoiceCommand {
        pub customer: String,
        pub total: String,
        /// Optional timestamp override ("YYYY-MM-DD HH:MM:SS"); current time if not provided
        pub date: Option<String>,
    }

    /// Conjunctive invoice filter; empty fields match everything.
    #[derive(Debug, Clone, Default)]
    pub struct InvoiceSearchQuery {
        /// Case-insensitive substring of the customer name
        pub keyword: Option<String>,
        /// Inclusive lower bound ("YYYY-MM-DD")
        pub start_date: Option<String>,
        /// Inclusive upper bound ("YYYY-MM-DD"), covers the whole day
        pub end_date: Option<String>,
    }
}

pub mod transactions {
    /// Input for creating a new transaction.
    #[derive(Debug, Clone)]
    pub struct CreateTransactionCommand {
        pub transaction_type: String,
        pub amount: String,
        pub description: String,
        /// Optional timestamp override ("YYYY-MM-DD HH:MM:SS"); current time if not provided
        pub date: Option<String>,
    }

    /// Conjunctive transaction filter; empty fields match everything.
    #[derive(Debug, Clone, Default)]
    pub struct TransactionSearchQuery {
        /// Exact, case-insensitive match on the stored type
        pub transaction_type: Option<String>,
        /// Case-insensitive substring of the description
        pub keyword: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }
}

pub mod products {
    use shared::Product;

    /// Input for creating a new product.
    #[derive(Debug, Clone)]
    pub struct CreateProductCommand {
        pub name: String,
        pub quantity: String,
        pub price: String,
    }

    /// Partial update; only provided fields are overwritten.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateProductCommand {
        pub product_id: u64,
        pub name: Option<String>,
        pub quantity: Option<String>,
        pub price: Option<String>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct ProductSearchQuery {
        /// Case-insensitive substring of the product name
        pub keyword: Option<String>,
    }

    /// Result of a partial update.
    #[derive(Debug, Clone)]
    pub struct UpdateProductResult {
        /// The product after the update, `None` when the id was not found
        pub product: Option<Product>,
    }

    impl UpdateProductResult {
        pub fn found(&self) -> bool {
            self.product.is_some()
        }
    }

    /// Result of deleting a product.
    #[derive(Debug, Clone)]
    pub struct DeleteProductResult {
        pub deleted: bool,
    }
}
