//! Read-side aggregation over recorded transactions.
//!
//! Pure projections: monthly income/expense totals, per-category expense
//! sums for the chart, top categories for the advisor snapshot, and the
//! dashboard's daily allowance. The direction of every amount is derived
//! from the category type through the same `category` module the ledger
//! engine uses.

pub mod service;
pub mod types;

pub use service::ReportService;
pub use types::{CategoryTotal, MonthlySummary, TransactionFacts};
