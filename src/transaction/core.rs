//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::{DatabaseId, TransactionId},
};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// This is a row of the transactions table as it is returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub kind: String,
    /// The ID of the category the transaction belongs to.
    ///
    /// The category does not have to exist.
    pub category: Option<DatabaseId>,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// When the transaction happened, exactly as the client wrote it.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
}

/// The transaction fields sent by a client to create or update a transaction.
///
/// Every field is optional here. Creating a transaction checks for the
/// required fields with [NewTransaction::try_from], whereas updates write the
/// fields as given, missing ones included.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    /// Either "income" or "expense".
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// The ID of the category the transaction belongs to.
    pub category: Option<DatabaseId>,
    /// The amount of money spent or earned.
    pub amount: Option<f64>,
    /// When the transaction happened.
    pub date: Option<String>,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
}

/// A transaction that has passed the checks for creation and is ready to be
/// inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// Either "income" or "expense".
    pub kind: String,
    /// The ID of the category the transaction belongs to.
    pub category: DatabaseId,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// When the transaction happened.
    pub date: String,
    /// A text description of what the transaction was for.
    pub description: Option<String>,
}

impl TryFrom<TransactionForm> for NewTransaction {
    type Error = Error;

    /// Check that `type`, `category`, `amount` and `date` are present.
    ///
    /// Empty strings and zero numbers count as missing, so an amount of zero
    /// or a category ID of zero is rejected. The value of `type` is not
    /// checked here; the database only accepts "income" or "expense".
    ///
    /// # Errors
    /// Returns [Error::MissingFields] if any of the required fields are missing.
    fn try_from(form: TransactionForm) -> Result<Self, Self::Error> {
        let kind = form.kind.filter(|kind| !kind.is_empty());
        let category = form.category.filter(|&category| category != 0);
        let amount = form
            .amount
            .filter(|amount| *amount != 0.0 && !amount.is_nan());
        let date = form.date.filter(|date| !date.is_empty());

        match (kind, category, amount, date) {
            (Some(kind), Some(category), Some(amount), Some(date)) => Ok(Self {
                kind,
                category,
                amount,
                date,
                description: form.description,
            }),
            _ => Err(Error::MissingFields),
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Insert a new transaction and return it with its generated ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error,
/// e.g. the type is neither "income" nor "expense".
pub fn create_transaction(
    transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO transactions (type, category, amount, date, description)
             VALUES (?1, ?2, ?3, ?4, ?5)
             RETURNING id, type, category, amount, date, description",
        )?
        .query_row(
            (
                transaction.kind,
                transaction.category,
                transaction.amount,
                transaction.date,
                transaction.description,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, type, category, amount, date, description FROM transactions WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Retrieve every transaction in the order they were created.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, type, category, amount, date, description FROM transactions ORDER BY id ASC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT CHECK(type IN ('income', 'expense')) NOT NULL,
                category INTEGER,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                description TEXT,
                FOREIGN KEY (category) REFERENCES categories(id)
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        kind: row.get(1)?,
        category: row.get(2)?,
        amount: row.get(3)?,
        date: row.get(4)?,
        description: row.get(5)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
