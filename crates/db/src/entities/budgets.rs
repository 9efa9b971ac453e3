//! `SeaORM` Entity for the budgets table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A per-category monthly spending limit.
///
/// Budgets sit next to the ledger; the engine never mutates them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    /// Budget ID.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The limited category.
    pub category_id: i32,
    /// Monthly spending limit.
    pub amount_limit: Decimal,
    /// Period in "YYYY-MM" format; unique per category.
    pub month_period: String,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The category this budget limits.
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Categories,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
