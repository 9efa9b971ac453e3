//! Dashboard route: the landing-page projection.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde_json::json;

use kasku_core::reports::ReportService;
use kasku_db::repositories::wallet::WalletRepository;
use kasku_db::ReportRepository;

use crate::AppState;
use crate::routes::{internal_error_response, month_bounds};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard))
}

/// GET `/dashboard` - Active wallets, recent activity, and the
/// month-to-date spending picture with the daily allowance.
async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let wallet_repo = WalletRepository::new((*state.db).clone());
    let report_repo = ReportRepository::new((*state.db).clone());

    let wallets = match wallet_repo.list(true).await {
        Ok(wallets) => wallets,
        Err(e) => return internal_error_response(&e, "Failed to list wallets"),
    };
    let total_balance: Decimal = wallets.iter().map(|w| w.balance).sum();

    let recent = match report_repo.recent_transactions(10).await {
        Ok(rows) => rows,
        Err(e) => return internal_error_response(&e, "Failed to list recent transactions"),
    };

    // Month-to-date figures: month start through today.
    let today = Utc::now().date_naive();
    let (month_start, month_end) = month_bounds(today);
    let facts = match report_repo.facts_between(month_start, today).await {
        Ok(facts) => facts,
        Err(e) => return internal_error_response(&e, "Failed to build dashboard summary"),
    };
    let summary = ReportService::summarize(&facts);

    let days_left = month_end.day() - today.day() + 1;
    let daily_allowance = ReportService::daily_allowance(summary.net_cashflow, days_left);

    let wallet_items: Vec<_> = wallets
        .iter()
        .map(|w| {
            json!({
                "id": w.id,
                "name": w.name,
                "wallet_type": w.wallet_type,
                "balance": w.balance.to_string(),
            })
        })
        .collect();

    let recent_items: Vec<_> = recent
        .iter()
        .map(|row| {
            json!({
                "id": row.transaction.id,
                "date": row.transaction.date,
                "amount": row.transaction.amount.to_string(),
                "description": row.transaction.description,
                "category": row.category.name,
                "category_type": row.category.category_type,
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "wallets": wallet_items,
            "total_balance": total_balance.to_string(),
            "recent_transactions": recent_items,
            "month_income": summary.total_income.to_string(),
            "month_expense": summary.total_expense.to_string(),
            "remaining_budget": summary.net_cashflow.to_string(),
            "daily_allowance": daily_allowance.to_string(),
        })),
    )
        .into_response()
}
