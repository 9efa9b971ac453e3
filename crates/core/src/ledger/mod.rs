//! The ledger consistency engine.
//!
//! This module implements the rules that keep wallet balances, transaction
//! records, and category semantics mutually consistent:
//! - Validation for the four mutating operations (record, transfer,
//!   archive, reconcile)
//! - Direction derivation from category type
//! - Reconciliation and archival planning
//! - The error taxonomy raised at the engine boundary
//!
//! Everything here is pure; the atomic apply step lives in the database
//! layer.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use service::LedgerService;
pub use types::{
    ArchiveAction, ArchivePlan, CategoryInfo, ReconciliationPlan, WalletEffect, WalletInfo,
};
