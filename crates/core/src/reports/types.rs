//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::{CategoryType, PriorityGroup};

/// The facts about one transaction the aggregator needs.
///
/// The repository joins each record with its category and hands these rows
/// over; the aggregator never re-reads the store.
#[derive(Debug, Clone)]
pub struct TransactionFacts {
    /// Stored (positive) amount.
    pub amount: Decimal,
    /// Category name.
    pub category_name: String,
    /// Category type, consulted for direction.
    pub category_type: CategoryType,
    /// Priority group, when the category is an expense.
    pub priority_group: Option<PriorityGroup>,
}

/// Per-category expense total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category name.
    pub name: String,
    /// Priority group of the category.
    pub priority_group: Option<PriorityGroup>,
    /// Summed amount.
    pub total: Decimal,
}

/// Monthly totals with the expense breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Total income for the period.
    pub total_income: Decimal,
    /// Total expense for the period.
    pub total_expense: Decimal,
    /// Income minus expense.
    pub net_cashflow: Decimal,
    /// Expense categories ordered by descending total.
    pub expense_by_category: Vec<CategoryTotal>,
}

impl MonthlySummary {
    /// An all-zero summary for a period with no transactions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_income: Decimal::ZERO,
            total_expense: Decimal::ZERO,
            net_cashflow: Decimal::ZERO,
            expense_by_category: Vec::new(),
        }
    }
}
