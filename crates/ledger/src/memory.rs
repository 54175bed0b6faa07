use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Instant;

use async_trait::async_trait;

use crate::{BookingKey, ClaimOutcome, LedgerError, Result, SeatId, store::SeatLedger};

/// Seats claimed for one booking key.
///
/// Keeps claim order for responses and a hash index for membership checks.
#[derive(Debug, Default)]
struct ReservationSet {
    seats: Vec<SeatId>,
    index: HashSet<SeatId>,
}

impl ReservationSet {
    /// Requested seats already present, deduplicated, in request order.
    fn conflicts(&self, requested: &[SeatId]) -> Vec<SeatId> {
        let mut seen = HashSet::new();
        requested
            .iter()
            .filter(|seat| self.index.contains(*seat) && seen.insert(*seat))
            .cloned()
            .collect()
    }

    /// Adds seats not yet present. Returns how many were added.
    fn extend(&mut self, requested: &[SeatId]) -> usize {
        let before = self.seats.len();
        for seat in requested {
            if self.index.insert(seat.clone()) {
                self.seats.push(seat.clone());
            }
        }
        self.seats.len() - before
    }

    fn snapshot(&self) -> Vec<SeatId> {
        self.seats.clone()
    }
}

type Entry = Arc<Mutex<ReservationSet>>;

/// In-memory seat ledger.
///
/// The key table sits behind an `RwLock`; every key owns its own `Mutex`
/// so that the conflict check and the insert happen under one lock per key
/// while claims on other keys proceed in parallel. State lives for the
/// process lifetime only.
#[derive(Clone, Default)]
pub struct InMemorySeatLedger {
    bookings: Arc<RwLock<HashMap<BookingKey, Entry>>>,
}

impl InMemorySeatLedger {
    /// Creates a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of booking keys that have seen a claim attempt.
    pub fn booking_count(&self) -> Result<usize> {
        let bookings = self
            .bookings
            .read()
            .map_err(|_| LedgerError::TablePoisoned)?;
        Ok(bookings.len())
    }

    /// Returns the entry for `key`, creating an empty one on first use.
    fn entry(&self, key: &BookingKey) -> Result<Entry> {
        {
            let bookings = self
                .bookings
                .read()
                .map_err(|_| LedgerError::TablePoisoned)?;
            if let Some(entry) = bookings.get(key) {
                return Ok(Arc::clone(entry));
            }
        }

        let mut bookings = self
            .bookings
            .write()
            .map_err(|_| LedgerError::TablePoisoned)?;
        Ok(Arc::clone(bookings.entry(key.clone()).or_default()))
    }

    fn existing_entry(&self, key: &BookingKey) -> Result<Option<Entry>> {
        let bookings = self
            .bookings
            .read()
            .map_err(|_| LedgerError::TablePoisoned)?;
        Ok(bookings.get(key).cloned())
    }
}

fn poisoned(key: &BookingKey) -> LedgerError {
    LedgerError::Poisoned { key: key.clone() }
}

#[async_trait]
impl SeatLedger for InMemorySeatLedger {
    #[tracing::instrument(skip(self, key, seats), fields(key = %key, requested = seats.len()))]
    async fn claim_seats(&self, key: &BookingKey, seats: &[SeatId]) -> Result<ClaimOutcome> {
        if seats.is_empty() {
            return Err(LedgerError::EmptyClaim { key: key.clone() });
        }

        let start = Instant::now();
        let entry = self.entry(key)?;

        let outcome = {
            let mut reserved = entry.lock().map_err(|_| poisoned(key))?;
            let conflicting_seats = reserved.conflicts(seats);

            if conflicting_seats.is_empty() {
                let added = reserved.extend(seats);
                metrics::counter!("seats_claimed_total").increment(added as u64);
                ClaimOutcome::Confirmed {
                    booked_seats: reserved.snapshot(),
                }
            } else {
                ClaimOutcome::Conflict {
                    conflicting_seats,
                    booked_seats: reserved.snapshot(),
                }
            }
        };

        metrics::counter!("seat_claims_total", "outcome" => outcome.label()).increment(1);
        metrics::histogram!("seat_claim_duration_seconds").record(start.elapsed().as_secs_f64());

        match &outcome {
            ClaimOutcome::Confirmed { booked_seats } => {
                tracing::debug!(total = booked_seats.len(), "seats claimed");
            }
            ClaimOutcome::Conflict {
                conflicting_seats, ..
            } => {
                tracing::info!(conflicts = conflicting_seats.len(), "seat claim rejected");
            }
        }

        Ok(outcome)
    }

    async fn list_claimed_seats(&self, key: &BookingKey) -> Result<Vec<SeatId>> {
        let Some(entry) = self.existing_entry(key)? else {
            return Ok(Vec::new());
        };
        let reserved = entry.lock().map_err(|_| poisoned(key))?;
        Ok(reserved.snapshot())
    }
}
