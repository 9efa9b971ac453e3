//! `SeaORM` Entity for the ai_advice table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A cached AI-generated financial summary.
///
/// The content is an opaque blob; the cache is keyed implicitly by the
/// creation date (at most one generation per calendar day).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "ai_advice")]
pub struct Model {
    /// Advice ID.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The generated advice text.
    pub content: String,
    /// Creation timestamp; doubles as the cache key.
    pub created_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
