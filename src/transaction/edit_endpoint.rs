//! The endpoint for overwriting an existing transaction.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use rusqlite::Connection;
use serde_json::{Value, json};

use crate::{
    Error, Store, TransactionId,
    transaction::{
        TransactionForm,
        request::{form_from_json, transaction_id_from_path},
    },
};

/// A route handler for updating a transaction, responds with a message.
///
/// All fields are overwritten, including ones missing from the request body.
/// Missing required fields are rejected by the database and result in a 500.
///
/// # Errors
/// Responds with 404 if the transaction does not exist.
pub async fn edit_transaction_endpoint(
    State(store): State<Store>,
    path: Result<Path<TransactionId>, PathRejection>,
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<Json<Value>, Error> {
    let transaction_id = transaction_id_from_path(path)?;
    let form = form_from_json(payload)?;

    store
        .run(move |connection| update_transaction(transaction_id, form, connection))
        .await?;

    tracing::debug!("updated transaction {transaction_id}");

    Ok(Json(json!({ "message": "Transaction updated successfully" })))
}

/// Overwrite every field of the transaction `id` with the values in `form`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if the new values violate the schema or there is
///   some other SQL error.
fn update_transaction(
    id: TransactionId,
    form: TransactionForm,
    connection: &Connection,
) -> Result<(), Error> {
    let rows_affected = connection.execute(
        "UPDATE transactions
         SET type = ?1, category = ?2, amount = ?3, date = ?4, description = ?5
         WHERE id = ?6",
        (
            form.kind,
            form.category,
            form.amount,
            form.date,
            form.description,
            id,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}


#[cfg(test)]
mod edit_transaction_endpoint_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{
        AppState, Store, Transaction, build_router,
        endpoints::{self, format_endpoint},
    };

    fn get_test_server() -> TestServer {
        let store = Store::open_in_memory().expect("Could not open store");
        TestServer::new(build_router(AppState::new(store)))
    }

    async fn create_test_transaction(server: &TestServer) -> Transaction {
        server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({
                "type": "income",
                "category": 1,
                "amount": 100.0,
                "date": "2024-01-01"
            }))
            .await
            .json::<Transaction>()
    }

    fn updated_body() -> Value {
        json!({
            "type": "expense",
            "category": 7,
            "amount": 12.5,
            "date": "2024-03-04",
            "description": "Lunch"
        })
    }

    #[tokio::test]
    async fn update_changes_stored_fields() {
        let server = get_test_server();
        let transaction = create_test_transaction(&server).await;
        let path = format_endpoint(endpoints::TRANSACTION, transaction.id);

        let response = server.put(&path).json(&updated_body()).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "message": "Transaction updated successfully" }));

        let got = server.get(&path).await.json::<Transaction>();
        assert_eq!(
            got,
            Transaction {
                id: transaction.id,
                kind: "expense".to_owned(),
                category: Some(7),
                amount: 12.5,
                date: "2024-03-04".to_owned(),
                description: Some("Lunch".to_owned()),
            }
        );
    }

    #[tokio::test]
    async fn update_missing_transaction_returns_not_found() {
        let server = get_test_server();
        let transaction = create_test_transaction(&server).await;

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, transaction.id + 1))
            .json(&updated_body())
            .await;

        response.assert_status_not_found();
        response.assert_json(&json!({ "error": "Transaction not found" }));

        let got = server
            .get(&format_endpoint(endpoints::TRANSACTION, transaction.id))
            .await
            .json::<Transaction>();
        assert_eq!(got, transaction);
    }

    #[tokio::test]
    async fn update_missing_transaction_without_json_body_returns_not_found() {
        let server = get_test_server();

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, 99999))
            .text("not json")
            .await;

        response.assert_status_not_found();
        response.assert_json(&json!({ "error": "Transaction not found" }));
    }

    #[tokio::test]
    async fn update_with_missing_fields_returns_server_error() {
        let server = get_test_server();
        let transaction = create_test_transaction(&server).await;

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, transaction.id))
            .json(&json!({ "category": 2 }))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.json::<Value>()["error"].is_string());
    }
}
