//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Datelike, Days, Months, NaiveDate};
use serde_json::json;
use tracing::error;

use kasku_core::ledger::LedgerError;

use crate::AppState;

pub mod advisor;
pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod health;
pub mod reports;
pub mod transactions;
pub mod wallets;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(wallets::routes())
        .merge(categories::routes())
        .merge(transactions::routes())
        .merge(reports::routes())
        .merge(budgets::routes())
        .merge(dashboard::routes())
        .merge(advisor::routes())
}

/// Maps a ledger engine error to its JSON response.
///
/// Storage errors are the only operationally significant kind and are the
/// only ones logged here.
pub(crate) fn ledger_error_response(err: &LedgerError) -> Response {
    if matches!(err, LedgerError::Database(_)) {
        error!(error = %err, "Ledger operation failed in storage");
    }

    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// The generic 500 response for unexpected storage failures.
pub(crate) fn internal_error_response(err: &impl std::fmt::Display, context: &str) -> Response {
    error!(error = %err, "{context}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "INTERNAL_ERROR",
            "message": "An error occurred"
        })),
    )
        .into_response()
}

/// A 400 response with a stable error code.
pub(crate) fn bad_request(code: &str, message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": code, "message": message })),
    )
        .into_response()
}

/// First and last day of the month containing `date`.
pub(crate) fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date.with_day(1).unwrap_or(date);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(date);
    (start, end)
}

/// Parses a "YYYY-MM" period string into its month bounds.
pub(crate) fn parse_month(period: &str) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::parse_from_str(&format!("{period}-01"), "%Y-%m-%d").ok()?;
    Some(month_bounds(first))
}
