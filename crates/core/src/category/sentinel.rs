//! System-managed sentinel categories.
//!
//! These categories are auto-created on first use by the ledger engine
//! (transfers and balance reconciliation). Their names are reserved: the
//! registry looks them up by name and creates them idempotently when
//! missing.

use super::types::{CategoryType, PriorityGroup};

/// A system-managed category definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    /// Records the source side of a wallet-to-wallet transfer.
    Transfer,
    /// Reconciliation found less money than the books claimed.
    BalanceShortfall,
    /// Reconciliation found more money than the books claimed.
    BalanceSurplus,
}

impl Sentinel {
    /// The reserved, globally unique category name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Transfer => "Transfer",
            Self::BalanceShortfall => "Koreksi Saldo",
            Self::BalanceSurplus => "Koreksi Saldo (Income)",
        }
    }

    /// The category type the sentinel is created with.
    #[must_use]
    pub const fn category_type(&self) -> CategoryType {
        match self {
            Self::Transfer => CategoryType::Transfer,
            Self::BalanceShortfall => CategoryType::Expense,
            Self::BalanceSurplus => CategoryType::Income,
        }
    }

    /// The priority group the sentinel is created with.
    #[must_use]
    pub const fn priority_group(&self) -> Option<PriorityGroup> {
        match self {
            Self::BalanceShortfall => Some(PriorityGroup::Lifestyle),
            Self::Transfer | Self::BalanceSurplus => None,
        }
    }

    /// The Phosphor icon the sentinel is created with.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Transfer => "arrows-left-right",
            Self::BalanceShortfall | Self::BalanceSurplus => "scales",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_names_are_distinct() {
        assert_ne!(Sentinel::Transfer.name(), Sentinel::BalanceShortfall.name());
        assert_ne!(
            Sentinel::BalanceShortfall.name(),
            Sentinel::BalanceSurplus.name()
        );
    }

    #[test]
    fn test_transfer_sentinel_definition() {
        let s = Sentinel::Transfer;
        assert_eq!(s.name(), "Transfer");
        assert_eq!(s.category_type(), CategoryType::Transfer);
        assert_eq!(s.priority_group(), None);
    }

    #[test]
    fn test_shortfall_sentinel_is_lifestyle_expense() {
        let s = Sentinel::BalanceShortfall;
        assert_eq!(s.name(), "Koreksi Saldo");
        assert_eq!(s.category_type(), CategoryType::Expense);
        assert_eq!(s.priority_group(), Some(PriorityGroup::Lifestyle));
    }

    #[test]
    fn test_surplus_sentinel_is_income_without_group() {
        let s = Sentinel::BalanceSurplus;
        assert_eq!(s.name(), "Koreksi Saldo (Income)");
        assert_eq!(s.category_type(), CategoryType::Income);
        assert_eq!(s.priority_group(), None);
    }

    #[test]
    fn test_sentinel_groups_obey_normalization_rule() {
        for s in [
            Sentinel::Transfer,
            Sentinel::BalanceShortfall,
            Sentinel::BalanceSurplus,
        ] {
            assert_eq!(
                PriorityGroup::normalize(s.priority_group(), s.category_type()),
                s.priority_group()
            );
        }
    }
}
