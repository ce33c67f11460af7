//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `TransactionForm` sent by clients
//! - Database functions for storing and querying transactions
//! - Route handlers for creating, reading, updating and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod request;

pub use core::{
    NewTransaction, Transaction, TransactionForm, create_transaction, create_transaction_table,
    get_all_transactions, get_transaction,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use get_endpoint::{get_transaction_endpoint, get_transactions_endpoint};
