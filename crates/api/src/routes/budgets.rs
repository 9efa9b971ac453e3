//! Budget routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use kasku_db::repositories::budget::{BudgetError, BudgetRepository};

use crate::AppState;
use crate::routes::{bad_request, internal_error_response, parse_month};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets))
        .route("/budgets", put(upsert_budget))
}

/// Query parameters for listing budgets.
#[derive(Debug, Deserialize)]
pub struct ListBudgetsQuery {
    /// Period in "YYYY-MM" format (default: the current month).
    pub period: Option<String>,
}

/// Request body for setting a budget.
#[derive(Debug, Deserialize)]
pub struct UpsertBudgetRequest {
    /// The limited category.
    pub category_id: i32,
    /// Period in "YYYY-MM" format.
    pub month_period: String,
    /// Monthly spending limit.
    pub amount_limit: Decimal,
}

/// GET `/budgets` - List the budgets for a period with their categories.
async fn list_budgets(
    State(state): State<AppState>,
    Query(query): Query<ListBudgetsQuery>,
) -> impl IntoResponse {
    let period = query
        .period
        .unwrap_or_else(|| Utc::now().date_naive().format("%Y-%m").to_string());

    if parse_month(&period).is_none() {
        return bad_request("INVALID_MONTH", "Period must be in YYYY-MM format");
    }

    let repo = BudgetRepository::new((*state.db).clone());

    match repo.list_for_period(&period).await {
        Ok(rows) => {
            let items: Vec<_> = rows
                .iter()
                .map(|row| {
                    json!({
                        "id": row.budget.id,
                        "category_id": row.category.id,
                        "category": row.category.name,
                        "priority_group": row.category.priority_group,
                        "month_period": row.budget.month_period,
                        "amount_limit": row.budget.amount_limit.to_string(),
                    })
                })
                .collect();

            (
                StatusCode::OK,
                Json(json!({ "period": period, "budgets": items })),
            )
                .into_response()
        }
        Err(e) => internal_error_response(&e, "Failed to list budgets"),
    }
}

/// PUT `/budgets` - Set (or replace) a category's monthly limit.
async fn upsert_budget(
    State(state): State<AppState>,
    Json(payload): Json<UpsertBudgetRequest>,
) -> impl IntoResponse {
    if parse_month(&payload.month_period).is_none() {
        return bad_request("INVALID_MONTH", "Period must be in YYYY-MM format");
    }

    let repo = BudgetRepository::new((*state.db).clone());

    match repo
        .upsert(payload.category_id, &payload.month_period, payload.amount_limit)
        .await
    {
        Ok(budget) => {
            info!(
                budget_id = %budget.id,
                category_id = %budget.category_id,
                period = %budget.month_period,
                "Budget set"
            );
            (
                StatusCode::OK,
                Json(json!({
                    "id": budget.id,
                    "category_id": budget.category_id,
                    "month_period": budget.month_period,
                    "amount_limit": budget.amount_limit.to_string(),
                })),
            )
                .into_response()
        }
        Err(BudgetError::CategoryNotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "CATEGORY_NOT_FOUND",
                "message": format!("Category not found: {id}")
            })),
        )
            .into_response(),
        Err(e) => internal_error_response(&e, "Failed to set budget"),
    }
}
