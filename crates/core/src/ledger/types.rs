//! Ledger domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::{CategoryType, Sentinel};

/// The slice of a wallet the engine needs for validation and planning.
#[derive(Debug, Clone)]
pub struct WalletInfo {
    /// The wallet ID.
    pub id: i32,
    /// Current balance.
    pub balance: Decimal,
    /// Whether the wallet is active (false = archived).
    pub is_active: bool,
}

/// The slice of a category the engine needs for validation.
#[derive(Debug, Clone)]
pub struct CategoryInfo {
    /// The category ID.
    pub id: i32,
    /// The category type, consulted for direction derivation.
    pub category_type: CategoryType,
}

/// The direction a transaction moves a wallet's balance.
///
/// Derived from the category type at apply-time; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletEffect {
    /// Balance decreases by the amount.
    Debit,
    /// Balance increases by the amount.
    Credit,
}

impl WalletEffect {
    /// The signed delta this effect applies for a positive `amount`.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Debit => -amount,
            Self::Credit => amount,
        }
    }
}

/// How to resolve a nonzero balance when archiving a wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveAction {
    /// Move the remaining balance to another wallet.
    Transfer,
    /// Book the remaining balance against a correction category.
    WriteOff,
}

/// The staged outcome of an archive request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchivePlan {
    /// Balance is already zero; archive directly.
    Plain,
    /// Move the full balance to the target wallet, then archive.
    ///
    /// No transaction record is written for this internal move.
    MoveBalance {
        /// The target wallet ID.
        target_id: i32,
        /// The full (possibly negative) balance being moved.
        amount: Decimal,
    },
    /// Zero the balance with a correction record, then archive.
    WriteOff(ReconciliationPlan),
}

/// The staged outcome of a balance reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationPlan {
    /// The balance the wallet will be set to.
    pub target_balance: Decimal,
    /// The absolute difference, stored as the record amount.
    pub amount: Decimal,
    /// The correction category the record is booked against.
    pub sentinel: Sentinel,
}
