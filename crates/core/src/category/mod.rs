//! Money-movement classification.
//!
//! This module defines the category semantics shared by the ledger engine
//! and the reporting aggregator:
//! - Category types (income/expense/transfer) and the balance effect they
//!   imply
//! - Priority groups for expense budgeting
//! - The system-managed sentinel categories created on first use

pub mod sentinel;
pub mod types;

pub use sentinel::Sentinel;
pub use types::{CategoryType, PriorityGroup};
