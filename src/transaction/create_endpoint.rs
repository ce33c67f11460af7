//! The endpoint for recording a new transaction.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    Error, Store,
    transaction::{
        NewTransaction, Transaction, TransactionForm, create_transaction,
        request::form_from_json,
    },
};

/// A route handler for creating a new transaction.
///
/// Responds with 201 and the new transaction, including its ID.
///
/// # Errors
/// Responds with 400 if any of `type`, `category`, `amount` or `date` are
/// missing (a body without a JSON content type has no fields), and 500 if the
/// database rejects the transaction.
pub async fn create_transaction_endpoint(
    State(store): State<Store>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let form = form_from_json(payload)?;
    let new_transaction = NewTransaction::try_from(form)?;

    let transaction = store
        .run(move |connection| create_transaction(new_transaction, connection))
        .await?;

    tracing::debug!("created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}
