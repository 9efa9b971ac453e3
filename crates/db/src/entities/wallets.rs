//! `SeaORM` Entity for the wallets table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A named money container with a balance and active status.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    /// Wallet ID.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unique wallet name (Cash, BCA, Gopay).
    pub name: String,
    /// Free-form type tag (cash, bank, e-wallet).
    pub wallet_type: String,
    /// Current balance; may legitimately go negative.
    pub balance: Decimal,
    /// False = archived (soft-deleted). History is never hard-deleted.
    pub is_active: bool,
    /// Optimistic-lock counter, bumped on every balance write.
    pub version: i64,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Transactions booked against this wallet.
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
