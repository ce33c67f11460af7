//! A minimal personal finance ledger.
//!
//! This library provides a JSON REST API for recording income and expense
//! transactions and summarising them over a date range and category.
//!
//! Data is kept in an in-memory SQLite database that lives as long as the
//! process.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod category;
mod database_id;
mod db;
pub mod endpoints;
mod logging;
mod routing;
mod store;
mod summary;
mod transaction;

pub use app_state::AppState;
pub use database_id::{DatabaseId, TransactionId};
pub use db::initialize as initialize_db;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use store::Store;
pub use summary::Summary;
pub use transaction::{Transaction, TransactionForm};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate_signal) => {
                terminate_signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One of the fields needed to create a transaction was missing, null,
    /// zero or an empty string.
    #[error("All fields are required")]
    MissingFields,

    /// The request could not be parsed, e.g. the body was not valid JSON or
    /// a field had the wrong type.
    #[error("{0}")]
    InvalidRequest(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the transaction has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("Transaction not found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    ///
    /// The SQLite message is passed through to the client as is.
    #[error("{0}")]
    SqlError(rusqlite::Error),

    /// The blocking task that runs a query panicked or was aborted.
    #[error("the database task failed: {0}")]
    QueryTaskFailed(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingFields | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::QueryTaskFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("An unexpected error occurred: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use serde_json::{Value, json};

    use crate::Error;

    async fn response_json(error: Error) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Could not read response body");

        (
            status,
            serde_json::from_slice(&body).expect("Response body is not JSON"),
        )
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::NotFound);
    }

    #[tokio::test]
    async fn missing_fields_is_bad_request() {
        let (status, body) = response_json(Error::MissingFields).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "All fields are required" }));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = response_json(Error::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Transaction not found" }));
    }

    #[tokio::test]
    async fn sql_error_passes_message_through() {
        let sql_error = rusqlite::Error::InvalidColumnName("foo".to_owned());
        let want_message = sql_error.to_string();

        let (status, body) = response_json(Error::SqlError(sql_error)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": want_message }));
    }
}
