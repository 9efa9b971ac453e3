//! Wallet management routes.
//!
//! Creation and listing go through the wallet store; archival and
//! reconciliation are ledger engine operations and go through the ledger
//! repository's atomic apply.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use kasku_core::ledger::ArchiveAction;
use kasku_db::entities::wallets;
use kasku_db::repositories::wallet::{CreateWalletInput, WalletError, WalletRepository};
use kasku_db::LedgerRepository;

use crate::AppState;
use crate::routes::{internal_error_response, ledger_error_response};

/// Creates the wallet routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/wallets", get(list_wallets))
        .route("/wallets", post(create_wallet))
        .route("/wallets/{wallet_id}/archive", post(archive_wallet))
        .route("/wallets/{wallet_id}/reconcile", post(reconcile_wallet))
}

/// Query parameters for listing wallets.
#[derive(Debug, Deserialize)]
pub struct ListWalletsQuery {
    /// Include archived wallets (default: false).
    pub include_archived: Option<bool>,
}

/// Request body for creating a wallet.
#[derive(Debug, Deserialize)]
pub struct CreateWalletRequest {
    /// Unique wallet name.
    pub name: String,
    /// Free-form type tag (cash, bank, e-wallet).
    pub wallet_type: String,
    /// Starting balance (default: 0).
    pub initial_balance: Option<Decimal>,
}

/// Request body for archiving a wallet.
#[derive(Debug, Deserialize)]
pub struct ArchiveWalletRequest {
    /// How to resolve a nonzero balance.
    pub action: Option<ArchiveAction>,
    /// Target wallet for `action = transfer`.
    pub target_wallet_id: Option<i32>,
}

/// Request body for reconciling a wallet balance.
#[derive(Debug, Deserialize)]
pub struct ReconcileRequest {
    /// The observed real-world balance.
    pub actual_balance: Decimal,
    /// The correction date.
    pub date: NaiveDate,
    /// Optional note for the correction record.
    pub description: Option<String>,
}

fn wallet_json(wallet: &wallets::Model) -> serde_json::Value {
    json!({
        "id": wallet.id,
        "name": wallet.name,
        "wallet_type": wallet.wallet_type,
        "balance": wallet.balance.to_string(),
        "is_active": wallet.is_active,
        "created_at": wallet.created_at,
    })
}

/// GET `/wallets` - List wallets with the total of active balances.
async fn list_wallets(
    State(state): State<AppState>,
    Query(query): Query<ListWalletsQuery>,
) -> impl IntoResponse {
    let repo = WalletRepository::new((*state.db).clone());
    let include_archived = query.include_archived.unwrap_or(false);

    match repo.list(!include_archived).await {
        Ok(wallets) => {
            let total_balance: Decimal = wallets
                .iter()
                .filter(|w| w.is_active)
                .map(|w| w.balance)
                .sum();

            let items: Vec<_> = wallets.iter().map(wallet_json).collect();
            (
                StatusCode::OK,
                Json(json!({
                    "wallets": items,
                    "total_balance": total_balance.to_string()
                })),
            )
                .into_response()
        }
        Err(e) => internal_error_response(&e, "Failed to list wallets"),
    }
}

/// POST `/wallets` - Create a wallet.
async fn create_wallet(
    State(state): State<AppState>,
    Json(payload): Json<CreateWalletRequest>,
) -> impl IntoResponse {
    let repo = WalletRepository::new((*state.db).clone());

    let input = CreateWalletInput {
        name: payload.name,
        wallet_type: payload.wallet_type,
        initial_balance: payload.initial_balance.unwrap_or(Decimal::ZERO),
    };

    match repo.create(input).await {
        Ok(wallet) => {
            info!(wallet_id = %wallet.id, name = %wallet.name, "Wallet created");
            (StatusCode::CREATED, Json(wallet_json(&wallet))).into_response()
        }
        Err(WalletError::DuplicateName(name)) => (
            StatusCode::CONFLICT,
            Json(json!({
                "error": "DUPLICATE_NAME",
                "message": format!("Wallet name '{name}' already exists")
            })),
        )
            .into_response(),
        Err(e) => internal_error_response(&e, "Failed to create wallet"),
    }
}

/// POST `/wallets/{wallet_id}/archive` - Archive (soft-delete) a wallet.
async fn archive_wallet(
    State(state): State<AppState>,
    Path(wallet_id): Path<i32>,
    Json(payload): Json<ArchiveWalletRequest>,
) -> impl IntoResponse {
    let repo = LedgerRepository::new((*state.db).clone());

    match repo
        .archive_wallet(wallet_id, payload.action, payload.target_wallet_id)
        .await
    {
        Ok(wallet) => {
            info!(wallet_id = %wallet.id, "Wallet archived");
            (StatusCode::OK, Json(wallet_json(&wallet))).into_response()
        }
        Err(e) => ledger_error_response(&e),
    }
}

/// POST `/wallets/{wallet_id}/reconcile` - Correct a wallet balance.
async fn reconcile_wallet(
    State(state): State<AppState>,
    Path(wallet_id): Path<i32>,
    Json(payload): Json<ReconcileRequest>,
) -> impl IntoResponse {
    let repo = LedgerRepository::new((*state.db).clone());

    match repo
        .reconcile_balance(
            wallet_id,
            payload.actual_balance,
            payload.date,
            payload.description,
        )
        .await
    {
        Ok(Some(record)) => {
            info!(
                wallet_id = %wallet_id,
                amount = %record.amount,
                "Balance reconciled"
            );
            (
                StatusCode::OK,
                Json(json!({
                    "adjusted": true,
                    "transaction": {
                        "id": record.id,
                        "date": record.date,
                        "amount": record.amount.to_string(),
                        "description": record.description,
                        "wallet_id": record.wallet_id,
                        "category_id": record.category_id,
                    }
                })),
            )
                .into_response()
        }
        Ok(None) => (
            StatusCode::OK,
            Json(json!({ "adjusted": false, "transaction": null })),
        )
            .into_response(),
        Err(e) => ledger_error_response(&e),
    }
}
