//! Report aggregation service.

use rust_decimal::Decimal;

use crate::category::CategoryType;

use super::types::{CategoryTotal, MonthlySummary, TransactionFacts};

/// Service for folding transaction facts into report projections.
pub struct ReportService;

impl ReportService {
    /// Builds the monthly summary from joined transaction rows.
    ///
    /// Income-type amounts sum into income, expense-type amounts into
    /// expense; transfer records move money between wallets without being
    /// either, so they are excluded from both totals. The expense
    /// breakdown is ordered by descending total (name as tiebreaker for a
    /// stable chart).
    #[must_use]
    pub fn summarize(rows: &[TransactionFacts]) -> MonthlySummary {
        let mut summary = MonthlySummary::empty();
        let mut expense_totals: Vec<CategoryTotal> = Vec::new();

        for row in rows {
            match row.category_type {
                CategoryType::Income => summary.total_income += row.amount,
                CategoryType::Expense => {
                    summary.total_expense += row.amount;
                    match expense_totals
                        .iter_mut()
                        .find(|t| t.name == row.category_name)
                    {
                        Some(entry) => entry.total += row.amount,
                        None => expense_totals.push(CategoryTotal {
                            name: row.category_name.clone(),
                            priority_group: row.priority_group,
                            total: row.amount,
                        }),
                    }
                }
                CategoryType::Transfer => {}
            }
        }

        expense_totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));

        summary.net_cashflow = summary.total_income - summary.total_expense;
        summary.expense_by_category = expense_totals;
        summary
    }

    /// Returns the `limit` largest expense categories.
    #[must_use]
    pub fn top_expense_categories(summary: &MonthlySummary, limit: usize) -> Vec<CategoryTotal> {
        summary
            .expense_by_category
            .iter()
            .take(limit)
            .cloned()
            .collect()
    }

    /// The dashboard's daily allowance: what may be spent per remaining
    /// day of the month without going over the remaining budget.
    ///
    /// Zero when the month is over or the budget already is.
    #[must_use]
    pub fn daily_allowance(remaining_budget: Decimal, days_left: u32) -> Decimal {
        if days_left == 0 || remaining_budget <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        (remaining_budget / Decimal::from(days_left)).round_dp(2)
    }
}
