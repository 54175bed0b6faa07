//! Shared identity types for the seat booking service.

pub mod types;

pub use types::{BookingKey, BookingKeyError, SeatId};
