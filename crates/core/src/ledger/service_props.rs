//! Property-based tests for the ledger service.
//!
//! - A valid record always moves the balance by exactly the amount, in the
//!   direction dictated by the category type.
//! - Reconciliation always lands on the actual balance and books the
//!   absolute difference.
//! - Reconciliation of a matching balance is always a no-op.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::category::{CategoryType, Sentinel};

use super::service::LedgerService;
use super::types::{CategoryInfo, WalletInfo};

/// Strategy for positive amounts (0.01 to 10,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for arbitrary signed balances.
fn any_balance() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for the two category types a record accepts.
fn recordable_type() -> impl Strategy<Value = CategoryType> {
    prop_oneof![Just(CategoryType::Expense), Just(CategoryType::Income)]
}

fn wallet(balance: Decimal) -> WalletInfo {
    WalletInfo {
        id: 1,
        balance,
        is_active: true,
    }
}

proptest! {
    #[test]
    fn prop_record_moves_balance_by_exactly_the_amount(
        balance in any_balance(),
        amount in positive_amount(),
        category_type in recordable_type(),
    ) {
        let w = wallet(balance);
        let category = CategoryInfo { id: 2, category_type };

        let effect = LedgerService::validate_record(amount, &w, &category).unwrap();
        let after = w.balance + effect.signed(amount);

        match category_type {
            CategoryType::Expense => prop_assert_eq!(after, balance - amount),
            CategoryType::Income => prop_assert_eq!(after, balance + amount),
            CategoryType::Transfer => unreachable!(),
        }
    }

    #[test]
    fn prop_transfer_conserves_total_balance(
        source_balance in any_balance(),
        target_balance in any_balance(),
        amount in positive_amount(),
    ) {
        let source = wallet(source_balance);
        let target = WalletInfo { id: 2, balance: target_balance, is_active: true };

        LedgerService::validate_transfer(amount, &source, &target).unwrap();

        let source_after = source.balance - amount;
        let target_after = target.balance + amount;
        prop_assert_eq!(source_after + target_after, source_balance + target_balance);
    }

    #[test]
    fn prop_reconciliation_lands_on_actual(
        balance in any_balance(),
        actual in any_balance(),
    ) {
        let plan = LedgerService::plan_reconciliation(&wallet(balance), actual).unwrap();

        match plan {
            None => prop_assert_eq!(balance, actual),
            Some(plan) => {
                prop_assert_eq!(plan.target_balance, actual);
                prop_assert_eq!(plan.amount, (actual - balance).abs());
                prop_assert!(plan.amount > Decimal::ZERO);
                let expected = if actual < balance {
                    Sentinel::BalanceShortfall
                } else {
                    Sentinel::BalanceSurplus
                };
                prop_assert_eq!(plan.sentinel, expected);
            }
        }
    }

    #[test]
    fn prop_reconciliation_is_idempotent(balance in any_balance()) {
        // Reconciling to the current balance never produces a plan.
        let plan = LedgerService::plan_reconciliation(&wallet(balance), balance).unwrap();
        prop_assert!(plan.is_none());
    }
}
