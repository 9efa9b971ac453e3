//! The ledger engine's atomic apply step.
//!
//! Every mutating operation runs as Validate -> Apply -> Commit inside a
//! single database transaction: the wallet balance change(s) and the
//! transaction record append succeed or fail together, so a reader never
//! observes one without the other.
//!
//! Wallet rows carry an optimistic `version` counter. Every balance write
//! is a compare-and-set on (id, version); zero rows affected means another
//! writer got there first and the whole operation rolls back with
//! `ConcurrentModification`.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};

use kasku_core::category::Sentinel;
use kasku_core::ledger::{
    ArchiveAction, ArchivePlan, CategoryInfo, LedgerError, LedgerService, ReconciliationPlan,
    WalletInfo,
};

use crate::entities::{categories, transactions, wallets};
use crate::repositories::category::CategoryRepository;

/// Input for recording a direct income/expense transaction.
#[derive(Debug, Clone)]
pub struct RecordTransactionInput {
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

/// Input for transferring funds between two wallets.
#[derive(Debug, Clone)]
pub struct TransferFundsInput {
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

/// Ledger repository: the only writer of wallet balances.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an income or expense transaction.
    ///
    /// The category's type decides the direction: expense debits the
    /// wallet, income credits it. Exactly one record is appended, with
    /// the positive amount as stored.
    ///
    /// # Errors
    ///
    /// Returns the engine taxonomy: `WalletNotFound`, `CategoryNotFound`,
    /// `WalletInactive`, `InvalidAmount`, `TransferCategoryReserved`,
    /// `ConcurrentModification`, or `Database`.
    pub async fn record_transaction(
        &self,
        input: RecordTransactionInput,
    ) -> Result<transactions::Model, LedgerError> {
        let txn = self.begin().await?;

        let wallet = load_wallet(&txn, input.wallet_id).await?;
        let category = load_category(&txn, input.category_id).await?;

        let effect =
            LedgerService::validate_record(input.amount, &wallet_info(&wallet), &category_info(&category))?;

        let new_balance = wallet.balance + effect.signed(input.amount);
        set_balance(&txn, &wallet, new_balance).await?;

        let record = insert_record(
            &txn,
            input.date,
            input.amount,
            input.description,
            wallet.id,
            category.id,
        )
        .await?;

        txn.commit().await.map_err(LedgerError::database)?;
        Ok(record)
    }

    /// Transfers funds between two wallets.
    ///
    /// Debits the source and credits the target in the same transaction;
    /// a partial transfer is never observable. Exactly one record is
    /// appended, against the source, with the auto-generated
    /// "Transfer ke {target}" description.
    ///
    /// # Errors
    ///
    /// Returns the engine taxonomy (see [`Self::record_transaction`]),
    /// plus `SameWallet` when source and target coincide.
    pub async fn transfer_funds(
        &self,
        input: TransferFundsInput,
    ) -> Result<transactions::Model, LedgerError> {
        let txn = self.begin().await?;

        let source = load_wallet(&txn, input.source_wallet_id).await?;
        let target = load_wallet(&txn, input.target_wallet_id).await?;

        LedgerService::validate_transfer(input.amount, &wallet_info(&source), &wallet_info(&target))?;

        set_balance(&txn, &source, source.balance - input.amount).await?;
        set_balance(&txn, &target, target.balance + input.amount).await?;

        let category = sentinel_category(&txn, Sentinel::Transfer).await?;
        let description =
            LedgerService::transfer_description(&target.name, input.description.as_deref());

        let record = insert_record(
            &txn,
            input.date,
            input.amount,
            Some(description),
            source.id,
            category.id,
        )
        .await?;

        txn.commit().await.map_err(LedgerError::database)?;
        Ok(record)
    }

    /// Archives (soft-deletes) a wallet.
    ///
    /// A nonzero balance must be resolved first: moved in full to a
    /// distinct active target (`action = transfer`, no record is written
    /// for the internal move) or booked against a correction category
    /// (`action = write_off`). Archival never makes value silently
    /// disappear.
    ///
    /// # Errors
    ///
    /// Returns the engine taxonomy, notably `ArchiveWouldStrandBalance`
    /// when a nonzero balance has nowhere to go.
    pub async fn archive_wallet(
        &self,
        wallet_id: i32,
        action: Option<ArchiveAction>,
        target_wallet_id: Option<i32>,
    ) -> Result<wallets::Model, LedgerError> {
        let txn = self.begin().await?;

        let wallet = load_wallet(&txn, wallet_id).await?;
        let target = match target_wallet_id {
            Some(id) => Some(load_wallet(&txn, id).await?),
            None => None,
        };

        let plan = LedgerService::plan_archive(
            &wallet_info(&wallet),
            action,
            target.as_ref().map(wallet_info).as_ref(),
        )?;

        match plan {
            ArchivePlan::Plain => {
                archive_with_balance(&txn, &wallet, wallet.balance).await?;
            }
            ArchivePlan::MoveBalance { target_id: _, amount } => {
                // plan_archive only emits this with a loaded target.
                let target = target.ok_or(LedgerError::ArchiveWouldStrandBalance)?;
                set_balance(&txn, &target, target.balance + amount).await?;
                archive_with_balance(&txn, &wallet, Decimal::ZERO).await?;
            }
            ArchivePlan::WriteOff(ReconciliationPlan {
                target_balance,
                amount,
                sentinel,
            }) => {
                let category = sentinel_category(&txn, sentinel).await?;
                archive_with_balance(&txn, &wallet, target_balance).await?;
                insert_record(
                    &txn,
                    Utc::now().date_naive(),
                    amount,
                    Some(LedgerService::write_off_description()),
                    wallet.id,
                    category.id,
                )
                .await?;
            }
        }

        let archived = load_wallet(&txn, wallet_id).await?;
        txn.commit().await.map_err(LedgerError::database)?;
        Ok(archived)
    }

    /// Reconciles a wallet's stored balance against the observed one.
    ///
    /// A matching balance is a pure no-op: no record, no mutation, and
    /// calling again changes nothing. Otherwise the balance is set to
    /// `actual_balance` and the absolute difference is booked against the
    /// matching correction sentinel.
    ///
    /// # Errors
    ///
    /// Returns the engine taxonomy.
    pub async fn reconcile_balance(
        &self,
        wallet_id: i32,
        actual_balance: Decimal,
        date: NaiveDate,
        description: Option<String>,
    ) -> Result<Option<transactions::Model>, LedgerError> {
        let txn = self.begin().await?;

        let wallet = load_wallet(&txn, wallet_id).await?;

        let Some(plan) = LedgerService::plan_reconciliation(&wallet_info(&wallet), actual_balance)?
        else {
            return Ok(None);
        };

        let category = sentinel_category(&txn, plan.sentinel).await?;
        set_balance(&txn, &wallet, plan.target_balance).await?;

        let record = insert_record(
            &txn,
            date,
            plan.amount,
            Some(LedgerService::reconciliation_description(description.as_deref())),
            wallet.id,
            category.id,
        )
        .await?;

        txn.commit().await.map_err(LedgerError::database)?;
        Ok(Some(record))
    }

    async fn begin(&self) -> Result<DatabaseTransaction, LedgerError> {
        self.db.begin().await.map_err(LedgerError::database)
    }
}

fn wallet_info(wallet: &wallets::Model) -> WalletInfo {
    WalletInfo {
        id: wallet.id,
        balance: wallet.balance,
        is_active: wallet.is_active,
    }
}

fn category_info(category: &categories::Model) -> CategoryInfo {
    CategoryInfo {
        id: category.id,
        category_type: category.category_type.clone().into(),
    }
}

async fn load_wallet(
    txn: &DatabaseTransaction,
    id: i32,
) -> Result<wallets::Model, LedgerError> {
    wallets::Entity::find_by_id(id)
        .one(txn)
        .await
        .map_err(LedgerError::database)?
        .ok_or(LedgerError::WalletNotFound(id))
}

async fn load_category(
    txn: &DatabaseTransaction,
    id: i32,
) -> Result<categories::Model, LedgerError> {
    categories::Entity::find_by_id(id)
        .one(txn)
        .await
        .map_err(LedgerError::database)?
        .ok_or(LedgerError::CategoryNotFound(id))
}

/// Compare-and-set of a wallet balance on (id, version).
async fn set_balance(
    txn: &DatabaseTransaction,
    wallet: &wallets::Model,
    new_balance: Decimal,
) -> Result<(), LedgerError> {
    let result = wallets::Entity::update_many()
        .col_expr(wallets::Column::Balance, Expr::value(new_balance))
        .col_expr(wallets::Column::Version, Expr::value(wallet.version + 1))
        .filter(wallets::Column::Id.eq(wallet.id))
        .filter(wallets::Column::Version.eq(wallet.version))
        .exec(txn)
        .await
        .map_err(LedgerError::database)?;

    if result.rows_affected == 0 {
        return Err(LedgerError::ConcurrentModification);
    }

    Ok(())
}

/// Compare-and-set that archives the wallet along with its final balance.
async fn archive_with_balance(
    txn: &DatabaseTransaction,
    wallet: &wallets::Model,
    final_balance: Decimal,
) -> Result<(), LedgerError> {
    let result = wallets::Entity::update_many()
        .col_expr(wallets::Column::Balance, Expr::value(final_balance))
        .col_expr(wallets::Column::IsActive, Expr::value(false))
        .col_expr(wallets::Column::Version, Expr::value(wallet.version + 1))
        .filter(wallets::Column::Id.eq(wallet.id))
        .filter(wallets::Column::Version.eq(wallet.version))
        .exec(txn)
        .await
        .map_err(LedgerError::database)?;

    if result.rows_affected == 0 {
        return Err(LedgerError::ConcurrentModification);
    }

    Ok(())
}

async fn insert_record(
    txn: &DatabaseTransaction,
    date: NaiveDate,
    amount: Decimal,
    description: Option<String>,
    wallet_id: i32,
    category_id: i32,
) -> Result<transactions::Model, LedgerError> {
    let record = transactions::ActiveModel {
        date: Set(date),
        amount: Set(amount),
        description: Set(description),
        wallet_id: Set(wallet_id),
        category_id: Set(category_id),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };

    record.insert(txn).await.map_err(LedgerError::database)
}

async fn sentinel_category(
    txn: &DatabaseTransaction,
    sentinel: Sentinel,
) -> Result<categories::Model, LedgerError> {
    CategoryRepository::find_or_create_sentinel(txn, sentinel)
        .await
        .map_err(LedgerError::database)
}
