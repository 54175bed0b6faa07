use crate::SeatId;

/// Decision returned by a claim attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// Every requested seat was claimed.
    Confirmed {
        /// All seats claimed for the key after this claim, in claim order.
        booked_seats: Vec<SeatId>,
    },
    /// Some requested seats were already taken; nothing was claimed.
    Conflict {
        /// Requested seats that were already claimed, in request order.
        conflicting_seats: Vec<SeatId>,
        /// Seats claimed for the key as they stood before the attempt.
        booked_seats: Vec<SeatId>,
    },
}

impl ClaimOutcome {
    /// Returns true if the claim succeeded.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ClaimOutcome::Confirmed { .. })
    }

    /// Returns the seats claimed for the key as reported by this outcome.
    pub fn booked_seats(&self) -> &[SeatId] {
        match self {
            ClaimOutcome::Confirmed { booked_seats }
            | ClaimOutcome::Conflict { booked_seats, .. } => booked_seats,
        }
    }

    /// Returns the conflicting seats; empty when the claim succeeded.
    pub fn conflicting_seats(&self) -> &[SeatId] {
        match self {
            ClaimOutcome::Confirmed { .. } => &[],
            ClaimOutcome::Conflict {
                conflicting_seats, ..
            } => conflicting_seats,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            ClaimOutcome::Confirmed { .. } => "confirmed",
            ClaimOutcome::Conflict { .. } => "conflict",
        }
    }
}
