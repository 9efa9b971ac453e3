//! `SeaORM` Entity for the categories table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{CategoryType, PriorityGroup};

/// A money-movement classification.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Category ID.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Globally unique category name (Makanan, Listrik, Gaji).
    pub name: String,
    /// Category type; drives the direction of every referencing record.
    pub category_type: CategoryType,
    /// Expense sub-classification; only expense categories carry one.
    pub priority_group: Option<PriorityGroup>,
    /// Phosphor icon name (e.g. "coffee").
    pub icon: Option<String>,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Transactions classified under this category.
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
    /// Budgets limiting this category.
    #[sea_orm(has_many = "super::budgets::Entity")]
    Budgets,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl Related<super::budgets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Budgets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
