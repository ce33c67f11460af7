use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use rusqlite::Connection;
use serde_json::{Value, json};

use crate::{
    Error, Store, TransactionId, transaction::request::transaction_id_from_path,
};

/// A route handler for deleting a transaction, responds with a message.
///
/// # Errors
/// Responds with 404 if the transaction does not exist.
pub async fn delete_transaction_endpoint(
    State(store): State<Store>,
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<Json<Value>, Error> {
    let transaction_id = transaction_id_from_path(path)?;

    match store
        .run(move |connection| delete_transaction(transaction_id, connection))
        .await?
    {
        0 => Err(Error::NotFound),
        _ => {
            tracing::debug!("deleted transaction {transaction_id}");
            Ok(Json(json!({ "message": "Transaction deleted successfully" })))
        }
    }
}

type RowsAffected = usize;

fn delete_transaction(id: TransactionId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM transactions WHERE id = :id", &[(":id", &id)])
        .map_err(|err| err.into())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::{
        Error, initialize_db,
        transaction::{
            NewTransaction, create_transaction, delete_endpoint::delete_transaction,
            get_transaction,
        },
    };

    #[test]
    fn test_deletes_transaction() {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();
        let transaction = create_transaction(
            NewTransaction {
                kind: "expense".to_owned(),
                category: 1,
                amount: 1.23,
                date: "2025-10-26".to_owned(),
                description: Some("Test".to_owned()),
            },
            &connection,
        )
        .unwrap();

        let rows_affected = delete_transaction(transaction.id, &connection).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(
            get_transaction(transaction.id, &connection),
            Err(Error::NotFound)
        )
    }

    #[test]
    fn test_delete_missing_transaction_affects_no_rows() {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();

        let rows_affected = delete_transaction(99999, &connection).unwrap();

        assert_eq!(rows_affected, 0);
    }
}
