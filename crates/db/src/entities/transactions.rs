//! `SeaORM` Entity for the transactions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An immutable transaction record.
///
/// The stored amount is always positive; the direction (credit or debit)
/// is derived from the referenced category's type at read-time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Transaction ID.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Transaction date.
    pub date: Date,
    /// Positive monetary amount.
    pub amount: Decimal,
    /// Optional free-text description.
    pub description: Option<String>,
    /// The wallet this record is booked against.
    pub wallet_id: i32,
    /// The category deciding the record's direction.
    pub category_id: i32,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The wallet this record belongs to.
    #[sea_orm(
        belongs_to = "super::wallets::Entity",
        from = "Column::WalletId",
        to = "super::wallets::Column::Id"
    )]
    Wallets,
    /// The category this record belongs to.
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Categories,
}

impl Related<super::wallets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wallets.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
