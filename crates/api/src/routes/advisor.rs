//! AI advisor route.
//!
//! The advisor consumes a read-only monthly snapshot and returns free
//! text. Its output is write-through cached at most once per calendar
//! day: a cached record for "today" short-circuits a new generation
//! request. The external call happens outside any ledger transaction.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use chrono::Utc;
use serde_json::json;
use tracing::{error, info};

use kasku_core::reports::ReportService;
use kasku_db::repositories::advice::AdviceRepository;
use kasku_db::ReportRepository;
use kasku_shared::AdvisorSnapshot;

use crate::AppState;
use crate::routes::{internal_error_response, month_bounds};

/// How many top expense categories the advisor sees.
const TOP_CATEGORIES: usize = 3;

/// Creates the advisor routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/advisor/analyze", post(analyze))
}

/// POST `/advisor/analyze` - Return today's advice, generating it on the
/// first request of the day.
async fn analyze(State(state): State<AppState>) -> impl IntoResponse {
    let advice_repo = AdviceRepository::new((*state.db).clone());
    let today = Utc::now().date_naive();

    // Daily cache first: one generation per calendar day.
    match advice_repo.find_for_date(today).await {
        Ok(Some(cached)) => {
            return (
                StatusCode::OK,
                Json(json!({
                    "status": "success",
                    "message": cached.content,
                    "source": "cache"
                })),
            )
                .into_response();
        }
        Ok(None) => {}
        Err(e) => return internal_error_response(&e, "Failed to read advice cache"),
    }

    if !state.advisor.is_configured() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "error",
                "error": "ADVISOR_NOT_CONFIGURED",
                "message": "Advisor API key is not configured"
            })),
        )
            .into_response();
    }

    // Month-to-date snapshot for the prompt.
    let (month_start, _) = month_bounds(today);
    let report_repo = ReportRepository::new((*state.db).clone());
    let facts = match report_repo.facts_between(month_start, today).await {
        Ok(facts) => facts,
        Err(e) => return internal_error_response(&e, "Failed to build advisor snapshot"),
    };
    let summary = ReportService::summarize(&facts);

    let snapshot = AdvisorSnapshot {
        month_income: summary.total_income,
        month_expense: summary.total_expense,
        top_categories: ReportService::top_expense_categories(&summary, TOP_CATEGORIES)
            .into_iter()
            .map(|total| (total.name, total.total))
            .collect(),
    };

    match state.advisor.generate_advice(&snapshot).await {
        Ok(text) => {
            if let Err(e) = advice_repo.insert(&text).await {
                // The advice is still worth returning; only the cache write
                // failed.
                error!(error = %e, "Failed to cache advisor output");
            }
            info!("Advisor output generated");
            (
                StatusCode::OK,
                Json(json!({
                    "status": "success",
                    "message": text,
                    "source": "api"
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Advisor request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "status": "error",
                    "error": "ADVISOR_UNAVAILABLE",
                    "message": "Failed to reach the advisor"
                })),
            )
                .into_response()
        }
    }
}
