//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the five tables (wallets, categories,
//!   transactions, budgets, ai_advice)
//! - Database migrations
//! - Repository abstractions, including the ledger engine's atomic apply
//!   step

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    AdviceRepository, BudgetRepository, CategoryRepository, LedgerRepository, ReportRepository,
    WalletRepository,
};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Establishes a connection pool with an explicit size cap.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options.max_connections(max_connections);
    Database::connect(options).await
}
