use async_trait::async_trait;

use crate::{BookingKey, ClaimOutcome, Result, SeatId};

/// Core trait for seat ledger implementations.
///
/// A ledger owns, for every booking key, the set of seats already claimed.
/// Seats move one way from free to claimed; there is no release.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait SeatLedger: Send + Sync {
    /// Claims `seats` for `key`, all or nothing.
    ///
    /// If any requested seat is already claimed the ledger is left untouched
    /// and [`ClaimOutcome::Conflict`] lists the overlapping seats. The check
    /// and the update are atomic with respect to other claims on the same key.
    /// Duplicate seats in one request count once. An unseen key behaves as
    /// an empty set.
    ///
    /// Returns `EmptyClaim` if `seats` is empty.
    async fn claim_seats(&self, key: &BookingKey, seats: &[SeatId]) -> Result<ClaimOutcome>;

    /// Lists the seats claimed for `key`, in the order they were claimed.
    ///
    /// Returns an empty list for an unseen key.
    async fn list_claimed_seats(&self, key: &BookingKey) -> Result<Vec<SeatId>>;
}

/// Extension trait providing convenience methods for seat ledgers.
#[async_trait]
pub trait SeatLedgerExt: SeatLedger {
    /// Checks whether a single seat is already claimed for `key`.
    async fn is_claimed(&self, key: &BookingKey, seat: &SeatId) -> Result<bool> {
        Ok(self.list_claimed_seats(key).await?.contains(seat))
    }
}

// Blanket implementation for all SeatLedger implementations
impl<T: SeatLedger + ?Sized> SeatLedgerExt for T {}
