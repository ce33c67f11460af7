//! Totals of income and expenses over an optional date range and category.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use rusqlite::{Connection, params_from_iter, types::Value};
use serde::{Deserialize, Serialize};

use crate::{Error, Store};

/// The filters for a [Summary], taken from the query string.
///
/// Empty values are treated as if they were not given.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SummaryQuery {
    /// The first date to include. Only used together with `end_date`.
    pub start_date: Option<String>,
    /// The last date to include. Only used together with `start_date`.
    pub end_date: Option<String>,
    /// Only include transactions with this category.
    pub category: Option<String>,
}

/// The total income and expenses of a set of transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// The sum of the amounts of income transactions.
    pub total_income: f64,
    /// The sum of the amounts of expense transactions.
    pub total_expenses: f64,
    /// `total_income` minus `total_expenses`.
    pub balance: f64,
}

impl FromIterator<(String, String)> for SummaryQuery {
    /// Build the filters from query string pairs.
    ///
    /// Unknown keys are ignored. When a key is repeated, the last value wins.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "startDate" => query.start_date = Some(value),
                "endDate" => query.end_date = Some(value),
                "category" => query.category = Some(value),
                _ => {}
            }
        }

        query
    }
}

/// A route handler for summarising transactions.
///
/// Supports the query parameters `startDate`, `endDate` and `category`.
pub async fn get_summary_endpoint(
    State(store): State<Store>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Summary>, Error> {
    let Query(pairs) = query.map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;
    let query = SummaryQuery::from_iter(pairs);

    store
        .run(move |connection| get_summary(query, connection))
        .await
        .map(Json)
}

/// Sum the income and expenses of the transactions that match `query`.
///
/// The date filter is inclusive and is only applied if both the start and end
/// date are given. Dates are compared as text.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
fn get_summary(query: SummaryQuery, connection: &Connection) -> Result<Summary, Error> {
    let mut query_string = String::from(
        "SELECT
            COALESCE(SUM(CASE WHEN type = 'income' THEN amount ELSE 0 END), 0),
            COALESCE(SUM(CASE WHEN type = 'expense' THEN amount ELSE 0 END), 0)
        FROM transactions",
    );
    let mut where_clause_parts = vec![];
    let mut query_parameters = vec![];

    let start_date = query.start_date.filter(|date| !date.is_empty());
    let end_date = query.end_date.filter(|date| !date.is_empty());

    if let (Some(start_date), Some(end_date)) = (start_date, end_date) {
        where_clause_parts.push(format!(
            "date BETWEEN ?{} AND ?{}",
            query_parameters.len() + 1,
            query_parameters.len() + 2,
        ));
        query_parameters.push(Value::Text(start_date));
        query_parameters.push(Value::Text(end_date));
    }

    if let Some(category) = query.category.filter(|category| !category.is_empty()) {
        where_clause_parts.push(format!("category = ?{}", query_parameters.len() + 1));
        query_parameters.push(Value::Text(category));
    }

    if !where_clause_parts.is_empty() {
        query_string.push_str(" WHERE ");
        query_string.push_str(&where_clause_parts.join(" AND "));
    }

    let (total_income, total_expenses): (f64, f64) = connection.query_row(
        &query_string,
        params_from_iter(query_parameters.iter()),
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(Summary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
    })
}
