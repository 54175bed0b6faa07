//! Seat reservation ledger.
//!
//! Tracks, per booking key, the set of seats already claimed and decides
//! whether a requested group of seats can be claimed atomically.

pub mod error;
pub mod memory;
pub mod outcome;
pub mod store;

pub use common::{BookingKey, SeatId};
pub use error::{LedgerError, Result};
pub use memory::InMemorySeatLedger;
pub use outcome::ClaimOutcome;
pub use store::{SeatLedger, SeatLedgerExt};
