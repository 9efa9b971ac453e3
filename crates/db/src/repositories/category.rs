//! Category repository.
//!
//! User-facing category creation plus the idempotent sentinel upsert the
//! ledger engine relies on. The globally unique name index is the
//! uniqueness guarantee; a unique-constraint violation on a concurrent
//! sentinel insert is handled as "re-fetch and return the existing row".

use kasku_core::category::{CategoryType, PriorityGroup, Sentinel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};

use crate::entities::categories;

/// Error types for category operations.
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    /// Category name already exists.
    #[error("Category name '{0}' already exists")]
    DuplicateName(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    NotFound(i32),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    /// Globally unique category name.
    pub name: String,
    /// Category type.
    pub category_type: CategoryType,
    /// Priority group; kept only when the type is expense.
    pub priority_group: Option<PriorityGroup>,
    /// Phosphor icon name.
    pub icon: Option<String>,
}

/// Category repository for CRUD and sentinel upserts.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user-defined category.
    ///
    /// A priority group supplied for a non-expense category is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the name is taken, or a database error.
    pub async fn create(
        &self,
        input: CreateCategoryInput,
    ) -> Result<categories::Model, CategoryError> {
        let existing = categories::Entity::find()
            .filter(categories::Column::Name.eq(&input.name))
            .one(&self.db)
            .await?;

        if existing.is_some() {
            return Err(CategoryError::DuplicateName(input.name));
        }

        let priority_group = PriorityGroup::normalize(input.priority_group, input.category_type);

        let category = categories::ActiveModel {
            name: Set(input.name.clone()),
            category_type: Set(input.category_type.into()),
            priority_group: Set(priority_group.map(Into::into)),
            icon: Set(input.icon),
            ..Default::default()
        };

        match category.insert(&self.db).await {
            Ok(model) => Ok(model),
            Err(err) if is_unique_violation(&err) => Err(CategoryError::DuplicateName(input.name)),
            Err(err) => Err(err.into()),
        }
    }

    /// Lists all categories ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list(&self) -> Result<Vec<categories::Model>, CategoryError> {
        let categories = categories::Entity::find()
            .order_by_asc(categories::Column::Name)
            .all(&self.db)
            .await?;
        Ok(categories)
    }

    /// Finds a category by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the ID does not resolve.
    pub async fn find_by_id(&self, id: i32) -> Result<categories::Model, CategoryError> {
        categories::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    /// Looks up a sentinel category by its reserved name, creating it on
    /// first use.
    ///
    /// Idempotent under concurrency: a unique-violation on the insert
    /// means another caller won the race, so the existing row is fetched
    /// and returned. Callable inside an open database transaction.
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup or insert fails.
    pub async fn find_or_create_sentinel<C: ConnectionTrait>(
        conn: &C,
        sentinel: Sentinel,
    ) -> Result<categories::Model, CategoryError> {
        if let Some(existing) = Self::find_by_name(conn, sentinel.name()).await? {
            return Ok(existing);
        }

        let category = categories::ActiveModel {
            name: Set(sentinel.name().to_string()),
            category_type: Set(sentinel.category_type().into()),
            priority_group: Set(sentinel.priority_group().map(Into::into)),
            icon: Set(Some(sentinel.icon().to_string())),
            ..Default::default()
        };

        match category.insert(conn).await {
            Ok(model) => Ok(model),
            Err(err) if is_unique_violation(&err) => Self::find_by_name(conn, sentinel.name())
                .await?
                .ok_or_else(|| CategoryError::Database(err)),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_name<C: ConnectionTrait>(
        conn: &C,
        name: &str,
    ) -> Result<Option<categories::Model>, DbErr> {
        categories::Entity::find()
            .filter(categories::Column::Name.eq(name))
            .one(conn)
            .await
    }
}

/// Whether a database error is a unique-constraint violation.
fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
