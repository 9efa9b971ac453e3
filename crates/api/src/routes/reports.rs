//! Monthly report routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use kasku_core::reports::ReportService;
use kasku_db::ReportRepository;

use crate::AppState;
use crate::routes::{bad_request, internal_error_response, month_bounds, parse_month};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/monthly", get(monthly_report))
}

/// Query parameters for the monthly report.
#[derive(Debug, Deserialize)]
pub struct MonthlyReportQuery {
    /// Period in "YYYY-MM" format (default: the current month).
    pub month: Option<String>,
}

/// GET `/reports/monthly` - Income/expense totals and the expense
/// breakdown for one month.
async fn monthly_report(
    State(state): State<AppState>,
    Query(query): Query<MonthlyReportQuery>,
) -> impl IntoResponse {
    let (start, end) = match &query.month {
        Some(month) => match parse_month(month) {
            Some(bounds) => bounds,
            None => {
                return bad_request("INVALID_MONTH", "Month must be in YYYY-MM format");
            }
        },
        None => month_bounds(Utc::now().date_naive()),
    };

    let repo = ReportRepository::new((*state.db).clone());

    match repo.facts_between(start, end).await {
        Ok(facts) => {
            let summary = ReportService::summarize(&facts);

            let breakdown: Vec<_> = summary
                .expense_by_category
                .iter()
                .map(|total| {
                    json!({
                        "name": total.name,
                        "priority_group": total.priority_group,
                        "total": total.total.to_string(),
                    })
                })
                .collect();

            (
                StatusCode::OK,
                Json(json!({
                    "month": start.format("%Y-%m").to_string(),
                    "total_income": summary.total_income.to_string(),
                    "total_expense": summary.total_expense.to_string(),
                    "net_cashflow": summary.net_cashflow.to_string(),
                    "expense_by_category": breakdown,
                })),
            )
                .into_response()
        }
        Err(e) => internal_error_response(&e, "Failed to build monthly report"),
    }
}
