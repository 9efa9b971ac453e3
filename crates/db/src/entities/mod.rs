//! `SeaORM` entity definitions.

pub mod ai_advice;
pub mod budgets;
pub mod categories;
pub mod sea_orm_active_enums;
pub mod transactions;
pub mod wallets;
