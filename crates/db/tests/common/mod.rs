//! Shared helpers for repository integration tests.
//!
//! Tests run against an in-memory SQLite database with the full migrated
//! schema, so every assertion goes through the real repositories.

#![allow(dead_code)]

use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use kasku_core::category::{CategoryType, PriorityGroup};
use kasku_db::entities::{categories, wallets};
use kasku_db::migration::Migrator;
use kasku_db::repositories::category::{CategoryRepository, CreateCategoryInput};
use kasku_db::repositories::wallet::{CreateWalletInput, WalletRepository};

/// Connects to a fresh in-memory database and migrates it.
pub async fn setup_db() -> DatabaseConnection {
    // A single pooled connection keeps the in-memory database alive and
    // visible to every query.
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory SQLite");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates an active wallet with the given starting balance.
pub async fn create_wallet(
    db: &DatabaseConnection,
    name: &str,
    initial_balance: Decimal,
) -> wallets::Model {
    WalletRepository::new(db.clone())
        .create(CreateWalletInput {
            name: name.to_string(),
            wallet_type: "cash".to_string(),
            initial_balance,
        })
        .await
        .expect("Failed to create wallet")
}

/// Creates a category of the given type.
pub async fn create_category(
    db: &DatabaseConnection,
    name: &str,
    category_type: CategoryType,
    priority_group: Option<PriorityGroup>,
) -> categories::Model {
    CategoryRepository::new(db.clone())
        .create(CreateCategoryInput {
            name: name.to_string(),
            category_type,
            priority_group,
            icon: None,
        })
        .await
        .expect("Failed to create category")
}
