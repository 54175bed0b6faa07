//! HTTP route handlers.

pub mod bookings;
pub mod catalog;
pub mod health;
pub mod metrics;
