use thiserror::Error;

use crate::BookingKey;

/// Errors that can occur when interacting with the seat ledger.
///
/// A seat conflict is not an error: it is reported through
/// [`ClaimOutcome::Conflict`](crate::ClaimOutcome::Conflict).
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A claim was submitted without any seats.
    #[error("Claim for {key} contains no seats")]
    EmptyClaim { key: BookingKey },

    /// A thread panicked while holding the ledger lock.
    #[error("Ledger state for {key} is poisoned")]
    Poisoned { key: BookingKey },

    /// A thread panicked while holding the key table lock.
    #[error("Ledger key table is poisoned")]
    TablePoisoned,
}

impl LedgerError {
    /// Returns true for failures the caller cannot fix by changing the request.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            LedgerError::Poisoned { .. } | LedgerError::TablePoisoned
        )
    }
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
