//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

/// The route for listing and creating transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route for getting, updating and deleting a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route for the income and expense summary.
pub const SUMMARY: &str = "/summary";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// Only the first parameter, e.g. `{transaction_id}`, is replaced. Paths
/// without a parameter are returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS);
        assert_endpoint_is_valid_uri(&format_endpoint(endpoints::TRANSACTION, 1));
        assert_endpoint_is_valid_uri(endpoints::SUMMARY);
    }

    #[test]
    fn format_endpoint_replaces_parameter() {
        assert_eq!(
            format_endpoint(endpoints::TRANSACTION, 42),
            "/transactions/42"
        );
    }

    #[test]
    fn format_endpoint_keeps_suffix() {
        assert_eq!(format_endpoint("/foo/{id}/edit", 7), "/foo/7/edit");
    }

    #[test]
    fn format_endpoint_without_parameter_is_unchanged() {
        assert_eq!(
            format_endpoint(endpoints::TRANSACTIONS, 1),
            endpoints::TRANSACTIONS
        );
    }
}
