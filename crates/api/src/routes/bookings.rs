//! Seat booking endpoints backed by the seat ledger.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::MovieCatalog;
use common::{BookingKey, SeatId};
use ledger::{ClaimOutcome, InMemorySeatLedger, SeatLedger};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, MISSING_BOOKING_FIELDS};

/// Shared application state accessible from all handlers.
pub struct AppState<L: SeatLedger = InMemorySeatLedger> {
    pub ledger: L,
    pub catalog: MovieCatalog,
}

// -- Request types --

/// Body of `POST /book-seat`.
///
/// Fields are loosely typed so that any malformed body is answered with the
/// same 400 response instead of a deserializer rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookSeatRequest {
    pub movie_id: Option<Value>,
    pub city: Option<Value>,
    pub theater_id: Option<Value>,
    pub showtime: Option<Value>,
    pub seats: Option<Value>,
}

/// Query of `GET /booked-seats`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSeatsQuery {
    pub movie_id: Option<String>,
    pub city: Option<String>,
    pub theater_id: Option<String>,
    pub showtime: Option<String>,
}

// -- Response types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmedResponse {
    pub message: &'static str,
    pub booked_seats: Vec<SeatId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConflictResponse {
    pub message: &'static str,
    pub conflicting_seats: Vec<SeatId>,
    pub booked_seats: Vec<SeatId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSeatsResponse {
    pub booked_seats: Vec<SeatId>,
}

// -- Validation --

/// Accepts non-blank strings and numbers; ids from some catalog sources
/// are numeric.
fn identifier(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn seat_list(value: Option<&Value>) -> Option<Vec<SeatId>> {
    let items = value?.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| match item {
            Value::String(s) if !s.trim().is_empty() => Some(SeatId::new(s.as_str())),
            _ => None,
        })
        .collect()
}

impl BookSeatRequest {
    /// Resolves the booking key and the requested seats.
    pub fn validate(&self) -> Result<(BookingKey, Vec<SeatId>), ApiError> {
        let missing = || ApiError::BadRequest(MISSING_BOOKING_FIELDS.to_string());

        let movie_id = identifier(self.movie_id.as_ref()).ok_or_else(missing)?;
        let city = identifier(self.city.as_ref()).ok_or_else(missing)?;
        let theater_id = identifier(self.theater_id.as_ref()).ok_or_else(missing)?;
        let showtime = identifier(self.showtime.as_ref()).ok_or_else(missing)?;
        let seats = seat_list(self.seats.as_ref()).ok_or_else(missing)?;

        let key = BookingKey::new(&movie_id, &city, &theater_id, &showtime)?;
        Ok((key, seats))
    }
}

impl BookedSeatsQuery {
    fn key(&self) -> Result<BookingKey, ApiError> {
        let field = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();
        Ok(BookingKey::new(
            &field(&self.movie_id),
            &field(&self.city),
            &field(&self.theater_id),
            &field(&self.showtime),
        )?)
    }
}

// -- Handlers --

/// POST /book-seat — claim a group of seats for one showtime, all or nothing.
#[tracing::instrument(skip(state, body))]
pub async fn book_seat<L: SeatLedger + 'static>(
    State(state): State<Arc<AppState<L>>>,
    body: Result<Json<BookSeatRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "unreadable booking body");
        ApiError::BadRequest(MISSING_BOOKING_FIELDS.to_string())
    })?;
    let (key, seats) = req.validate()?;

    let outcome = state
        .ledger
        .claim_seats(&key, &seats)
        .await
        .map_err(|e| ApiError::from_ledger(e, "Failed to book seats"))?;

    let response = match outcome {
        ClaimOutcome::Confirmed { booked_seats } => {
            tracing::info!(%key, seats = seats.len(), "booking confirmed");
            (
                StatusCode::CREATED,
                Json(BookingConfirmedResponse {
                    message: "Booking confirmed",
                    booked_seats,
                }),
            )
                .into_response()
        }
        ClaimOutcome::Conflict {
            conflicting_seats,
            booked_seats,
        } => (
            StatusCode::CONFLICT,
            Json(BookingConflictResponse {
                message: "Some seats are already booked",
                conflicting_seats,
                booked_seats,
            }),
        )
            .into_response(),
    };

    Ok(response)
}

/// GET /booked-seats — seats already claimed for one showtime.
#[tracing::instrument(skip(state))]
pub async fn booked_seats<L: SeatLedger + 'static>(
    State(state): State<Arc<AppState<L>>>,
    Query(query): Query<BookedSeatsQuery>,
) -> Result<Json<BookedSeatsResponse>, ApiError> {
    let key = query.key()?;
    let booked_seats = state.ledger.list_claimed_seats(&key).await?;
    Ok(Json(BookedSeatsResponse { booked_seats }))
}
