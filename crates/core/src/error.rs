//! Domain error model.

use thiserror::Error;

use crate::id::AccountNumber;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Only failures that make an operation impossible belong here. A debit that
/// is rejected for insufficient funds is a normal outcome and is reported as
/// `Ok(false)` by the ledger instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// No account is registered under the given number.
    #[error("account not found: {0}")]
    AccountNotFound(AccountNumber),

    /// The operation does not apply to the targeted account
    /// (e.g. delegation on a consumer account).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// The lock guarding a shared ledger was poisoned by a panicking writer.
    #[error("ledger lock poisoned")]
    LockPoisoned,
}

impl LedgerError {
    pub fn not_found(number: AccountNumber) -> Self {
        Self::AccountNotFound(number)
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }
}
