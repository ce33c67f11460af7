//! The endpoints for reading transactions.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error, Store, TransactionId,
    transaction::{
        Transaction, get_all_transactions, get_transaction, request::transaction_id_from_path,
    },
};

/// A route handler for listing every transaction in the order they were created.
pub async fn get_transactions_endpoint(
    State(store): State<Store>,
) -> Result<Json<Vec<Transaction>>, Error> {
    store.run(get_all_transactions).await.map(Json)
}

/// A route handler for getting a transaction by its database ID.
///
/// Responds with 404 if the transaction does not exist.
pub async fn get_transaction_endpoint(
    State(store): State<Store>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<Transaction>, Error> {
    let transaction_id = transaction_id_from_path(path)?;

    store
        .run(move |connection| get_transaction(transaction_id, connection))
        .await
        .map(Json)
}
