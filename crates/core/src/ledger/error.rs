//! Ledger error types.
//!
//! All four engine operations raise this taxonomy at the engine boundary.
//! None of the variants are retried automatically: they represent caller
//! input problems or store failures requiring a caller decision.

use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Not-found Errors ==========
    /// Wallet ID does not resolve.
    #[error("Wallet not found: {0}")]
    WalletNotFound(i32),

    /// Category ID does not resolve.
    #[error("Category not found: {0}")]
    CategoryNotFound(i32),

    // ========== Validation Errors ==========
    /// Operation targets an archived wallet.
    #[error("Wallet {0} is archived")]
    WalletInactive(i32),

    /// Amount must be positive.
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    /// Transfer source and target must be different wallets.
    #[error("Source and target wallets must be different")]
    SameWallet,

    /// Transfer-type categories are reserved for the transfer operation.
    #[error("Transfer categories cannot be used for a direct transaction")]
    TransferCategoryReserved,

    /// Archiving would leave a nonzero balance with nowhere to go.
    #[error("Wallet has a nonzero balance; transfer it or write it off before archiving")]
    ArchiveWouldStrandBalance,

    // ========== Uniqueness Errors ==========
    /// Uniqueness violation on wallet/category creation.
    #[error("Name '{0}' is already taken")]
    DuplicateName(String),

    // ========== Concurrency Errors ==========
    /// Another writer touched the wallet row mid-operation.
    #[error("Concurrent modification detected, please retry")]
    ConcurrentModification,

    // ========== Storage Errors ==========
    /// The atomic apply step failed; everything staged was rolled back.
    #[error("Database error: {0}")]
    Database(String),
}

impl LedgerError {
    /// Wraps a storage-layer failure.
    pub fn database(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::WalletNotFound(_) => "WALLET_NOT_FOUND",
            Self::CategoryNotFound(_) => "CATEGORY_NOT_FOUND",
            Self::WalletInactive(_) => "WALLET_INACTIVE",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::SameWallet => "SAME_WALLET",
            Self::TransferCategoryReserved => "TRANSFER_CATEGORY_RESERVED",
            Self::ArchiveWouldStrandBalance => "ARCHIVE_WOULD_STRAND_BALANCE",
            Self::DuplicateName(_) => "DUPLICATE_NAME",
            Self::ConcurrentModification => "CONCURRENT_MODIFICATION",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation errors
            Self::WalletInactive(_)
            | Self::InvalidAmount
            | Self::SameWallet
            | Self::TransferCategoryReserved
            | Self::ArchiveWouldStrandBalance => 400,

            // 404 Not Found
            Self::WalletNotFound(_) | Self::CategoryNotFound(_) => 404,

            // 409 Conflict
            Self::DuplicateName(_) | Self::ConcurrentModification => 409,

            // 500 Internal Server Error
            Self::Database(_) => 500,
        }
    }

    /// Returns true if the caller may safely retry the same call.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ConcurrentModification)
    }
}
