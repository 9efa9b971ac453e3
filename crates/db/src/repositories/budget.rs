//! Budget repository.
//!
//! Budgets are per-(category, "YYYY-MM") monthly limits. They sit next to
//! the ledger and are never touched by the engine's operations.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::{budgets, categories};

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(i32),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// A budget joined with its category, for listings.
#[derive(Debug, Clone)]
pub struct BudgetWithCategory {
    /// The budget row.
    pub budget: budgets::Model,
    /// The limited category.
    pub category: categories::Model,
}

/// Budget repository for upserts and per-period listings.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the monthly limit for a category, replacing an existing one
    /// for the same period.
    ///
    /// # Errors
    ///
    /// Returns `CategoryNotFound` or a database error.
    pub async fn upsert(
        &self,
        category_id: i32,
        month_period: &str,
        amount_limit: Decimal,
    ) -> Result<budgets::Model, BudgetError> {
        let category = categories::Entity::find_by_id(category_id)
            .one(&self.db)
            .await?;

        if category.is_none() {
            return Err(BudgetError::CategoryNotFound(category_id));
        }

        let existing = budgets::Entity::find()
            .filter(budgets::Column::CategoryId.eq(category_id))
            .filter(budgets::Column::MonthPeriod.eq(month_period))
            .one(&self.db)
            .await?;

        let model = match existing {
            Some(existing) => {
                let mut active: budgets::ActiveModel = existing.into();
                active.amount_limit = Set(amount_limit);
                active.update(&self.db).await?
            }
            None => {
                let budget = budgets::ActiveModel {
                    category_id: Set(category_id),
                    amount_limit: Set(amount_limit),
                    month_period: Set(month_period.to_string()),
                    ..Default::default()
                };
                budget.insert(&self.db).await?
            }
        };

        Ok(model)
    }

    /// Lists all budgets for a period with their categories.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list_for_period(
        &self,
        month_period: &str,
    ) -> Result<Vec<BudgetWithCategory>, BudgetError> {
        let rows = budgets::Entity::find()
            .filter(budgets::Column::MonthPeriod.eq(month_period))
            .order_by_asc(budgets::Column::Id)
            .find_also_related(categories::Entity)
            .all(&self.db)
            .await?;

        let budgets = rows
            .into_iter()
            .filter_map(|(budget, category)| {
                category.map(|category| BudgetWithCategory { budget, category })
            })
            .collect();

        Ok(budgets)
    }
}
