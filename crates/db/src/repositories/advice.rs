//! AI advice cache repository.
//!
//! The advisor's output is write-through cached at most once per calendar
//! day: a record created "today" short-circuits a new generation request.

use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::ai_advice;

/// Error types for advice cache operations.
#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Repository for the daily advice cache.
#[derive(Debug, Clone)]
pub struct AdviceRepository {
    db: DatabaseConnection,
}

impl AdviceRepository {
    /// Creates a new advice repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the advice generated on the given (UTC) date, if any.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn find_for_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<ai_advice::Model>, AdviceError> {
        let day_start = date.and_time(NaiveTime::MIN).and_utc().fixed_offset();
        let day_end = (date + chrono::Days::new(1))
            .and_time(NaiveTime::MIN)
            .and_utc()
            .fixed_offset();

        let advice = ai_advice::Entity::find()
            .filter(ai_advice::Column::CreatedAt.gte(day_start))
            .filter(ai_advice::Column::CreatedAt.lt(day_end))
            .order_by_desc(ai_advice::Column::CreatedAt)
            .one(&self.db)
            .await?;

        Ok(advice)
    }

    /// Stores a freshly generated advice blob.
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails.
    pub async fn insert(&self, content: &str) -> Result<ai_advice::Model, AdviceError> {
        let advice = ai_advice::ActiveModel {
            content: Set(content.to_string()),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        Ok(advice.insert(&self.db).await?)
    }
}
