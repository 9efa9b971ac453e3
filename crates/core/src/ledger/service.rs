//! Ledger service: validation and planning for the four mutating
//! operations.
//!
//! This service contains pure business logic with no database
//! dependencies. Each engine operation first runs through here; the
//! database layer then applies the returned plan inside one transaction.

use rust_decimal::Decimal;

use crate::category::{CategoryType, Sentinel};

use super::error::LedgerError;
use super::types::{
    ArchiveAction, ArchivePlan, CategoryInfo, ReconciliationPlan, WalletEffect, WalletInfo,
};

/// Default note used when a reconciliation carries no description.
const DEFAULT_RECONCILE_NOTE: &str = "Selisih Saldo";

/// Note used when archival writes off a remaining balance.
const ARCHIVE_WRITE_OFF_NOTE: &str = "Tutup Dompet";

/// Ledger service for operation validation and planning.
pub struct LedgerService;

impl LedgerService {
    /// Validates a direct transaction and derives its balance effect.
    ///
    /// Direction comes from the category type: expense debits the wallet,
    /// income credits it. Transfer categories are reserved for
    /// [`Self::validate_transfer`]'s operation path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount`, `WalletInactive`, or
    /// `TransferCategoryReserved` when validation fails.
    pub fn validate_record(
        amount: Decimal,
        wallet: &WalletInfo,
        category: &CategoryInfo,
    ) -> Result<WalletEffect, LedgerError> {
        Self::ensure_positive(amount)?;
        Self::ensure_active(wallet)?;

        match category.category_type {
            CategoryType::Expense => Ok(WalletEffect::Debit),
            CategoryType::Income => Ok(WalletEffect::Credit),
            CategoryType::Transfer => Err(LedgerError::TransferCategoryReserved),
        }
    }

    /// Validates a transfer between two wallets.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount`, `SameWallet`, or `WalletInactive` when
    /// validation fails.
    pub fn validate_transfer(
        amount: Decimal,
        source: &WalletInfo,
        target: &WalletInfo,
    ) -> Result<(), LedgerError> {
        Self::ensure_positive(amount)?;

        if source.id == target.id {
            return Err(LedgerError::SameWallet);
        }

        Self::ensure_active(source)?;
        Self::ensure_active(target)?;

        Ok(())
    }

    /// Plans a balance reconciliation (opname).
    ///
    /// Returns `None` when the actual balance already matches the books:
    /// no record, no mutation. Otherwise the plan sets the balance to
    /// `actual` and books the absolute difference against the matching
    /// correction sentinel (shortfall = expense, surplus = income).
    ///
    /// # Errors
    ///
    /// Returns `WalletInactive` if the wallet is archived.
    pub fn plan_reconciliation(
        wallet: &WalletInfo,
        actual: Decimal,
    ) -> Result<Option<ReconciliationPlan>, LedgerError> {
        Self::ensure_active(wallet)?;

        Ok(Self::balance_correction(wallet.balance, actual))
    }

    /// Plans a wallet archival.
    ///
    /// A wallet with a zero balance archives directly. A nonzero balance
    /// must be resolved: either moved in full to a distinct active target
    /// wallet, or written off with a correction record. Archival never
    /// makes value silently disappear.
    ///
    /// # Errors
    ///
    /// Returns `WalletInactive`, `SameWallet`, or
    /// `ArchiveWouldStrandBalance` when the request cannot be honored.
    pub fn plan_archive(
        wallet: &WalletInfo,
        action: Option<ArchiveAction>,
        target: Option<&WalletInfo>,
    ) -> Result<ArchivePlan, LedgerError> {
        Self::ensure_active(wallet)?;

        if wallet.balance.is_zero() {
            return Ok(ArchivePlan::Plain);
        }

        match action {
            Some(ArchiveAction::Transfer) => {
                let target = target.ok_or(LedgerError::ArchiveWouldStrandBalance)?;
                if target.id == wallet.id {
                    return Err(LedgerError::SameWallet);
                }
                Self::ensure_active(target)?;

                Ok(ArchivePlan::MoveBalance {
                    target_id: target.id,
                    amount: wallet.balance,
                })
            }
            Some(ArchiveAction::WriteOff) => {
                // Writing off is reconciling to zero.
                let plan = Self::balance_correction(wallet.balance, Decimal::ZERO)
                    .ok_or(LedgerError::ArchiveWouldStrandBalance)?;
                Ok(ArchivePlan::WriteOff(plan))
            }
            None => Err(LedgerError::ArchiveWouldStrandBalance),
        }
    }

    /// Builds the auto-generated description for a transfer record.
    #[must_use]
    pub fn transfer_description(target_name: &str, note: Option<&str>) -> String {
        match note {
            Some(note) if !note.trim().is_empty() => {
                format!("Transfer ke {target_name} ({note})")
            }
            _ => format!("Transfer ke {target_name}"),
        }
    }

    /// Builds the description for a reconciliation record.
    #[must_use]
    pub fn reconciliation_description(note: Option<&str>) -> String {
        let note = match note {
            Some(note) if !note.trim().is_empty() => note,
            _ => DEFAULT_RECONCILE_NOTE,
        };
        format!("Opname: {note}")
    }

    /// Builds the description for an archive write-off record.
    #[must_use]
    pub fn write_off_description() -> String {
        format!("Opname: {ARCHIVE_WRITE_OFF_NOTE}")
    }

    fn ensure_positive(amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        Ok(())
    }

    fn ensure_active(wallet: &WalletInfo) -> Result<(), LedgerError> {
        if !wallet.is_active {
            return Err(LedgerError::WalletInactive(wallet.id));
        }
        Ok(())
    }

    /// The shared correction rule: `diff = actual - current`.
    ///
    /// Zero diff is a no-op; a negative diff books a shortfall expense,
    /// a positive diff books a surplus income.
    fn balance_correction(current: Decimal, actual: Decimal) -> Option<ReconciliationPlan> {
        let diff = actual - current;
        if diff.is_zero() {
            return None;
        }

        let sentinel = if diff < Decimal::ZERO {
            Sentinel::BalanceShortfall
        } else {
            Sentinel::BalanceSurplus
        };

        Some(ReconciliationPlan {
            target_balance: actual,
            amount: diff.abs(),
            sentinel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn wallet(id: i32, balance: Decimal) -> WalletInfo {
        WalletInfo {
            id,
            balance,
            is_active: true,
        }
    }

    fn archived(id: i32, balance: Decimal) -> WalletInfo {
        WalletInfo {
            id,
            balance,
            is_active: false,
        }
    }

    fn category(id: i32, category_type: CategoryType) -> CategoryInfo {
        CategoryInfo { id, category_type }
    }

    #[test]
    fn test_expense_debits_income_credits() {
        let w = wallet(1, dec!(100_000));

        let effect =
            LedgerService::validate_record(dec!(30_000), &w, &category(2, CategoryType::Expense))
                .unwrap();
        assert_eq!(effect, WalletEffect::Debit);
        assert_eq!(w.balance + effect.signed(dec!(30_000)), dec!(70_000));

        let effect =
            LedgerService::validate_record(dec!(30_000), &w, &category(3, CategoryType::Income))
                .unwrap();
        assert_eq!(effect, WalletEffect::Credit);
        assert_eq!(w.balance + effect.signed(dec!(30_000)), dec!(130_000));
    }

    #[test]
    fn test_record_rejects_transfer_category() {
        let result = LedgerService::validate_record(
            dec!(10_000),
            &wallet(1, dec!(0)),
            &category(2, CategoryType::Transfer),
        );
        assert!(matches!(result, Err(LedgerError::TransferCategoryReserved)));
    }

    #[test]
    fn test_record_rejects_non_positive_amount() {
        for amount in [dec!(0), dec!(-5_000)] {
            let result = LedgerService::validate_record(
                amount,
                &wallet(1, dec!(0)),
                &category(2, CategoryType::Expense),
            );
            assert!(matches!(result, Err(LedgerError::InvalidAmount)));
        }
    }

    #[test]
    fn test_record_rejects_archived_wallet() {
        let result = LedgerService::validate_record(
            dec!(10_000),
            &archived(4, dec!(0)),
            &category(2, CategoryType::Expense),
        );
        assert!(matches!(result, Err(LedgerError::WalletInactive(4))));
    }

    #[test]
    fn test_transfer_validation_happy_path() {
        let result = LedgerService::validate_transfer(
            dec!(20_000),
            &wallet(1, dec!(50_000)),
            &wallet(2, dec!(10_000)),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_transfer_rejects_same_wallet() {
        let result = LedgerService::validate_transfer(
            dec!(20_000),
            &wallet(1, dec!(50_000)),
            &wallet(1, dec!(50_000)),
        );
        assert!(matches!(result, Err(LedgerError::SameWallet)));
    }

    #[test]
    fn test_transfer_rejects_archived_endpoint() {
        let result = LedgerService::validate_transfer(
            dec!(20_000),
            &wallet(1, dec!(50_000)),
            &archived(2, dec!(0)),
        );
        assert!(matches!(result, Err(LedgerError::WalletInactive(2))));

        let result = LedgerService::validate_transfer(
            dec!(20_000),
            &archived(1, dec!(50_000)),
            &wallet(2, dec!(0)),
        );
        assert!(matches!(result, Err(LedgerError::WalletInactive(1))));
    }

    #[test]
    fn test_transfer_overdraft_is_permitted() {
        // Balances may legitimately go negative; no sufficient-funds check.
        let result = LedgerService::validate_transfer(
            dec!(80_000),
            &wallet(1, dec!(50_000)),
            &wallet(2, dec!(0)),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_reconciliation_shortfall() {
        let plan = LedgerService::plan_reconciliation(&wallet(3, dec!(5_000)), dec!(3_000))
            .unwrap()
            .unwrap();

        assert_eq!(plan.target_balance, dec!(3_000));
        assert_eq!(plan.amount, dec!(2_000));
        assert_eq!(plan.sentinel, Sentinel::BalanceShortfall);
    }

    #[test]
    fn test_reconciliation_surplus() {
        let plan = LedgerService::plan_reconciliation(&wallet(3, dec!(5_000)), dec!(8_500))
            .unwrap()
            .unwrap();

        assert_eq!(plan.target_balance, dec!(8_500));
        assert_eq!(plan.amount, dec!(3_500));
        assert_eq!(plan.sentinel, Sentinel::BalanceSurplus);
    }

    #[test]
    fn test_reconciliation_matching_balance_is_noop() {
        let plan = LedgerService::plan_reconciliation(&wallet(3, dec!(5_000)), dec!(5_000)).unwrap();
        assert!(plan.is_none());
    }

    #[test]
    fn test_reconciliation_rejects_archived_wallet() {
        let result = LedgerService::plan_reconciliation(&archived(3, dec!(5_000)), dec!(3_000));
        assert!(matches!(result, Err(LedgerError::WalletInactive(3))));
    }

    #[test]
    fn test_archive_zero_balance_is_plain() {
        let plan = LedgerService::plan_archive(&wallet(1, dec!(0)), None, None).unwrap();
        assert_eq!(plan, ArchivePlan::Plain);
    }

    #[test]
    fn test_archive_moves_full_balance_to_target() {
        let plan = LedgerService::plan_archive(
            &wallet(1, dec!(42_000)),
            Some(ArchiveAction::Transfer),
            Some(&wallet(2, dec!(10_000))),
        )
        .unwrap();

        assert_eq!(
            plan,
            ArchivePlan::MoveBalance {
                target_id: 2,
                amount: dec!(42_000),
            }
        );
    }

    #[test]
    fn test_archive_moves_negative_balance_too() {
        let plan = LedgerService::plan_archive(
            &wallet(1, dec!(-7_500)),
            Some(ArchiveAction::Transfer),
            Some(&wallet(2, dec!(10_000))),
        )
        .unwrap();

        assert_eq!(
            plan,
            ArchivePlan::MoveBalance {
                target_id: 2,
                amount: dec!(-7_500),
            }
        );
    }

    #[test]
    fn test_archive_write_off_positive_balance_is_shortfall() {
        let plan =
            LedgerService::plan_archive(&wallet(1, dec!(9_000)), Some(ArchiveAction::WriteOff), None)
                .unwrap();

        assert_eq!(
            plan,
            ArchivePlan::WriteOff(ReconciliationPlan {
                target_balance: dec!(0),
                amount: dec!(9_000),
                sentinel: Sentinel::BalanceShortfall,
            })
        );
    }

    #[test]
    fn test_archive_write_off_negative_balance_is_surplus() {
        let plan =
            LedgerService::plan_archive(&wallet(1, dec!(-4_000)), Some(ArchiveAction::WriteOff), None)
                .unwrap();

        assert_eq!(
            plan,
            ArchivePlan::WriteOff(ReconciliationPlan {
                target_balance: dec!(0),
                amount: dec!(4_000),
                sentinel: Sentinel::BalanceSurplus,
            })
        );
    }

    #[test]
    fn test_archive_never_strands_a_balance() {
        let result = LedgerService::plan_archive(&wallet(1, dec!(42_000)), None, None);
        assert!(matches!(result, Err(LedgerError::ArchiveWouldStrandBalance)));

        let result =
            LedgerService::plan_archive(&wallet(1, dec!(42_000)), Some(ArchiveAction::Transfer), None);
        assert!(matches!(result, Err(LedgerError::ArchiveWouldStrandBalance)));
    }

    #[test]
    fn test_archive_rejects_self_transfer() {
        let result = LedgerService::plan_archive(
            &wallet(1, dec!(42_000)),
            Some(ArchiveAction::Transfer),
            Some(&wallet(1, dec!(42_000))),
        );
        assert!(matches!(result, Err(LedgerError::SameWallet)));
    }

    #[test]
    fn test_archive_rejects_archived_target() {
        let result = LedgerService::plan_archive(
            &wallet(1, dec!(42_000)),
            Some(ArchiveAction::Transfer),
            Some(&archived(2, dec!(0))),
        );
        assert!(matches!(result, Err(LedgerError::WalletInactive(2))));
    }

    #[test]
    fn test_transfer_description_formats() {
        assert_eq!(
            LedgerService::transfer_description("BCA", None),
            "Transfer ke BCA"
        );
        assert_eq!(
            LedgerService::transfer_description("BCA", Some("uang sekolah")),
            "Transfer ke BCA (uang sekolah)"
        );
        assert_eq!(
            LedgerService::transfer_description("BCA", Some("   ")),
            "Transfer ke BCA"
        );
    }

    #[test]
    fn test_reconciliation_description_formats() {
        assert_eq!(
            LedgerService::reconciliation_description(None),
            "Opname: Selisih Saldo"
        );
        assert_eq!(
            LedgerService::reconciliation_description(Some("hitung ulang dompet")),
            "Opname: hitung ulang dompet"
        );
        assert_eq!(
            LedgerService::reconciliation_description(Some("")),
            "Opname: Selisih Saldo"
        );
    }
}
