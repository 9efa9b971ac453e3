//! Read-side queries over the transaction log.
//!
//! The repository only fetches joined rows; the folding (totals, ordering,
//! direction derivation) happens in `kasku_core::reports` so the engine
//! and the aggregator share one category-type rule.

use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use kasku_core::reports::TransactionFacts;

use crate::entities::{categories, transactions};

/// Error types for report queries.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// A transaction joined with its category, for listings.
#[derive(Debug, Clone)]
pub struct TransactionWithCategory {
    /// The transaction record.
    pub transaction: transactions::Model,
    /// The category it references.
    pub category: categories::Model,
}

/// Report repository: read-only projections over the transaction log.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the aggregation facts for all transactions in a date range
    /// (inclusive on both ends).
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn facts_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionFacts>, ReportError> {
        let rows = transactions::Entity::find()
            .filter(transactions::Column::Date.gte(start))
            .filter(transactions::Column::Date.lte(end))
            .find_also_related(categories::Entity)
            .all(&self.db)
            .await?;

        let facts = rows
            .into_iter()
            .filter_map(|(tx, category)| {
                let category = category?;
                Some(TransactionFacts {
                    amount: tx.amount,
                    category_name: category.name,
                    category_type: category.category_type.into(),
                    priority_group: category.priority_group.map(Into::into),
                })
            })
            .collect();

        Ok(facts)
    }

    /// Lists transactions in a date range with their categories, newest
    /// first.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn transactions_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TransactionWithCategory>, ReportError> {
        let rows = transactions::Entity::find()
            .filter(transactions::Column::Date.gte(start))
            .filter(transactions::Column::Date.lte(end))
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::Id)
            .find_also_related(categories::Entity)
            .all(&self.db)
            .await?;

        Ok(collect_with_category(rows))
    }

    /// Lists the most recent transactions with their categories.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn recent_transactions(
        &self,
        limit: u64,
    ) -> Result<Vec<TransactionWithCategory>, ReportError> {
        let rows = transactions::Entity::find()
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::Id)
            .limit(limit)
            .find_also_related(categories::Entity)
            .all(&self.db)
            .await?;

        Ok(collect_with_category(rows))
    }
}

fn collect_with_category(
    rows: Vec<(transactions::Model, Option<categories::Model>)>,
) -> Vec<TransactionWithCategory> {
    rows.into_iter()
        .filter_map(|(transaction, category)| {
            category.map(|category| TransactionWithCategory {
                transaction,
                category,
            })
        })
        .collect()
}
