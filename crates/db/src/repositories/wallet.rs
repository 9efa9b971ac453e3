//! Wallet repository.
//!
//! Creation and listing only: balances are mutated exclusively by the
//! ledger repository's atomic operations.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};

use crate::entities::wallets;

/// Error types for wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// Wallet name already exists.
    #[error("Wallet name '{0}' already exists")]
    DuplicateName(String),

    /// Wallet not found.
    #[error("Wallet not found: {0}")]
    NotFound(i32),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a wallet.
#[derive(Debug, Clone)]
pub struct CreateWalletInput {
    /// Unique wallet name.
    pub name: String,
    /// Free-form type tag (cash, bank, e-wallet).
    pub wallet_type: String,
    /// Starting balance.
    pub initial_balance: Decimal,
}

/// Wallet repository for creation and lookups.
#[derive(Debug, Clone)]
pub struct WalletRepository {
    db: DatabaseConnection,
}

impl WalletRepository {
    /// Creates a new wallet repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new wallet.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the name is taken, or a database error.
    pub async fn create(&self, input: CreateWalletInput) -> Result<wallets::Model, WalletError> {
        let existing = wallets::Entity::find()
            .filter(wallets::Column::Name.eq(&input.name))
            .one(&self.db)
            .await?;

        if existing.is_some() {
            return Err(WalletError::DuplicateName(input.name));
        }

        let wallet = wallets::ActiveModel {
            name: Set(input.name.clone()),
            wallet_type: Set(input.wallet_type),
            balance: Set(input.initial_balance),
            is_active: Set(true),
            version: Set(0),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        // The pre-check races with concurrent creates; the unique index
        // on name is the actual guarantee.
        match wallet.insert(&self.db).await {
            Ok(model) => Ok(model),
            Err(err) if is_unique_violation(&err) => Err(WalletError::DuplicateName(input.name)),
            Err(err) => Err(err.into()),
        }
    }

    /// Lists wallets, optionally restricted to active ones.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list(&self, active_only: bool) -> Result<Vec<wallets::Model>, WalletError> {
        let mut query = wallets::Entity::find();

        if active_only {
            query = query.filter(wallets::Column::IsActive.eq(true));
        }

        let wallets = query.order_by_asc(wallets::Column::Id).all(&self.db).await?;
        Ok(wallets)
    }

    /// Finds a wallet by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the ID does not resolve.
    pub async fn find_by_id(&self, id: i32) -> Result<wallets::Model, WalletError> {
        wallets::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(WalletError::NotFound(id))
    }
}

/// Whether a database error is a unique-constraint violation.
fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
