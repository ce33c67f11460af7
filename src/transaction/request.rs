//! Helpers for turning extractor rejections into API errors.

use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{Error, TransactionId, transaction::TransactionForm};

/// Unwrap the transaction ID from the request path.
///
/// An ID that is not an integer cannot refer to a transaction, so it is
/// reported as [Error::NotFound].
pub(super) fn transaction_id_from_path(
    path: Result<Path<TransactionId>, PathRejection>,
) -> Result<TransactionId, Error> {
    match path {
        Ok(Path(transaction_id)) => Ok(transaction_id),
        Err(rejection) => {
            tracing::debug!("could not parse transaction ID: {}", rejection.body_text());
            Err(Error::NotFound)
        }
    }
}

/// Unwrap the transaction fields from the JSON request body.
///
/// A request without a JSON content type carries no fields, so it is read as
/// an empty form. Creating from an empty form then fails with
/// [Error::MissingFields], and updating a missing transaction with one still
/// fails with [Error::NotFound].
///
/// # Errors
/// Returns [Error::InvalidRequest] if the body claims to be JSON but is not a
/// JSON object with fields of the right types.
pub(super) fn form_from_json(
    payload: Result<Json<TransactionForm>, JsonRejection>,
) -> Result<TransactionForm, Error> {
    match payload {
        Ok(Json(form)) => Ok(form),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(TransactionForm::default()),
        Err(rejection) => Err(Error::InvalidRequest(rejection.body_text())),
    }
}
