//! String-backed enums for entity columns.
//!
//! SQLite has no native enum type, so category type and priority group are
//! stored as short strings. Conversions to and from the pure domain enums
//! in `kasku-core` live here so the rest of the crate never matches on raw
//! strings.

use kasku_core::category::{CategoryType as DomainCategoryType, PriorityGroup as DomainPriorityGroup};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category type column values.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    /// Money entering a wallet.
    #[sea_orm(string_value = "income")]
    Income,
    /// Money leaving a wallet.
    #[sea_orm(string_value = "expense")]
    Expense,
    /// Money moving between wallets.
    #[sea_orm(string_value = "transfer")]
    Transfer,
}

impl From<DomainCategoryType> for CategoryType {
    fn from(value: DomainCategoryType) -> Self {
        match value {
            DomainCategoryType::Income => Self::Income,
            DomainCategoryType::Expense => Self::Expense,
            DomainCategoryType::Transfer => Self::Transfer,
        }
    }
}

impl From<CategoryType> for DomainCategoryType {
    fn from(value: CategoryType) -> Self {
        match value {
            CategoryType::Income => Self::Income,
            CategoryType::Expense => Self::Expense,
            CategoryType::Transfer => Self::Transfer,
        }
    }
}

/// Priority group column values.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum PriorityGroup {
    /// Obligations.
    #[sea_orm(string_value = "fixed")]
    Fixed,
    /// Necessities.
    #[sea_orm(string_value = "living")]
    Living,
    /// Wants.
    #[sea_orm(string_value = "lifestyle")]
    Lifestyle,
}

impl From<DomainPriorityGroup> for PriorityGroup {
    fn from(value: DomainPriorityGroup) -> Self {
        match value {
            DomainPriorityGroup::Fixed => Self::Fixed,
            DomainPriorityGroup::Living => Self::Living,
            DomainPriorityGroup::Lifestyle => Self::Lifestyle,
        }
    }
}

impl From<PriorityGroup> for DomainPriorityGroup {
    fn from(value: PriorityGroup) -> Self {
        match value {
            PriorityGroup::Fixed => Self::Fixed,
            PriorityGroup::Living => Self::Living,
            PriorityGroup::Lifestyle => Self::Lifestyle,
        }
    }
}
