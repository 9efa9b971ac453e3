//! Repository abstractions for data access.
//!
//! Each repository owns a pooled connection handle. The ledger repository
//! is the only writer of wallet balances and transaction records; the
//! others are thin CRUD/read layers.

pub mod advice;
pub mod budget;
pub mod category;
pub mod ledger;
pub mod report;
pub mod wallet;

pub use advice::AdviceRepository;
pub use budget::BudgetRepository;
pub use category::CategoryRepository;
pub use ledger::LedgerRepository;
pub use report::ReportRepository;
pub use wallet::WalletRepository;
