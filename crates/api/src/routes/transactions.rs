//! Transaction routes: direct records and transfers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use kasku_db::repositories::ledger::{
    LedgerRepository, RecordTransactionInput, TransferFundsInput,
};
use kasku_db::repositories::report::{ReportRepository, TransactionWithCategory};
use kasku_db::entities::transactions;

use crate::AppState;
use crate::routes::{internal_error_response, ledger_error_response};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions", post(create_transaction))
        .route("/transactions/transfer", post(transfer_funds))
}

/// Query parameters for listing transactions.
#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    /// Start date filter (inclusive).
    pub from: Option<NaiveDate>,
    /// End date filter (inclusive).
    pub to: Option<NaiveDate>,
    /// Maximum rows when no date range is given (default: 10).
    pub limit: Option<u64>,
}

/// Request body for recording a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Transaction date.
    pub date: NaiveDate,
    /// Positive amount.
    pub amount: Decimal,
    /// Optional free-text description.
    pub description: Option<String>,
    /// The wallet to book against.
    pub wallet_id: i32,
    /// The category deciding the direction.
    pub category_id: i32,
}

/// Request body for transferring funds.
#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    /// Transfer date.
    pub date: NaiveDate,
    /// Positive amount.
    pub amount: Decimal,
    /// The wallet money leaves.
    pub source_wallet_id: i32,
    /// The wallet money enters.
    pub target_wallet_id: i32,
    /// Optional note appended to the auto-generated description.
    pub description: Option<String>,
}

fn record_json(record: &transactions::Model) -> serde_json::Value {
    json!({
        "id": record.id,
        "date": record.date,
        "amount": record.amount.to_string(),
        "description": record.description,
        "wallet_id": record.wallet_id,
        "category_id": record.category_id,
        "created_at": record.created_at,
    })
}

fn listed_json(row: &TransactionWithCategory) -> serde_json::Value {
    json!({
        "id": row.transaction.id,
        "date": row.transaction.date,
        "amount": row.transaction.amount.to_string(),
        "description": row.transaction.description,
        "wallet_id": row.transaction.wallet_id,
        "category": row.category.name,
        "category_type": row.category.category_type,
        "priority_group": row.category.priority_group,
    })
}

/// GET `/transactions` - List transactions, newest first.
///
/// With `from`/`to` the listing covers the range; without them it returns
/// the most recent rows.
async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<ListTransactionsQuery>,
) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());

    let result = match (query.from, query.to) {
        (Some(from), Some(to)) => repo.transactions_between(from, to).await,
        _ => repo.recent_transactions(query.limit.unwrap_or(10)).await,
    };

    match result {
        Ok(rows) => {
            let items: Vec<_> = rows.iter().map(listed_json).collect();
            (StatusCode::OK, Json(json!({ "transactions": items }))).into_response()
        }
        Err(e) => internal_error_response(&e, "Failed to list transactions"),
    }
}

/// POST `/transactions` - Record an income or expense transaction.
async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransactionRequest>,
) -> impl IntoResponse {
    let repo = LedgerRepository::new((*state.db).clone());

    let input = RecordTransactionInput {
        date: payload.date,
        amount: payload.amount,
        description: payload.description,
        wallet_id: payload.wallet_id,
        category_id: payload.category_id,
    };

    match repo.record_transaction(input).await {
        Ok(record) => {
            info!(
                transaction_id = %record.id,
                wallet_id = %record.wallet_id,
                amount = %record.amount,
                "Transaction recorded"
            );
            (StatusCode::CREATED, Json(record_json(&record))).into_response()
        }
        Err(e) => ledger_error_response(&e),
    }
}

/// POST `/transactions/transfer` - Transfer funds between wallets.
async fn transfer_funds(
    State(state): State<AppState>,
    Json(payload): Json<TransferRequest>,
) -> impl IntoResponse {
    let repo = LedgerRepository::new((*state.db).clone());

    let input = TransferFundsInput {
        date: payload.date,
        amount: payload.amount,
        source_wallet_id: payload.source_wallet_id,
        target_wallet_id: payload.target_wallet_id,
        description: payload.description,
    };

    match repo.transfer_funds(input).await {
        Ok(record) => {
            info!(
                transaction_id = %record.id,
                source_wallet_id = %record.wallet_id,
                amount = %record.amount,
                "Funds transferred"
            );
            (StatusCode::CREATED, Json(record_json(&record))).into_response()
        }
        Err(e) => ledger_error_response(&e),
    }
}
