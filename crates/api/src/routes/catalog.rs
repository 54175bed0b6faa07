//! Movie and theater catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use catalog::{CityTheaters, Movie, Theater};
use ledger::SeatLedger;
use serde::Serialize;

use crate::error::ApiError;
use crate::routes::bookings::AppState;

#[derive(Serialize)]
pub struct MoviesResponse {
    pub movies: Vec<Movie>,
}

#[derive(Serialize)]
pub struct MovieResponse {
    pub movie: Movie,
}

#[derive(Serialize)]
pub struct TheatersResponse {
    pub theaters: &'static [CityTheaters],
}

#[derive(Serialize)]
pub struct TheaterResponse {
    pub city: &'static str,
    pub theater: &'static Theater,
}

/// GET /movies — normalized movie catalog.
#[tracing::instrument(skip(state))]
pub async fn list_movies<L: SeatLedger + 'static>(
    State(state): State<Arc<AppState<L>>>,
) -> Result<Json<MoviesResponse>, ApiError> {
    let movies = state.catalog.movies().await.map_err(|e| ApiError::Internal {
        message: "Failed to fetch movies",
        detail: e.to_string(),
    })?;
    Ok(Json(MoviesResponse { movies }))
}

/// GET /movies/{id} — a single movie by normalized id.
#[tracing::instrument(skip(state))]
pub async fn get_movie<L: SeatLedger + 'static>(
    State(state): State<Arc<AppState<L>>>,
    Path(id): Path<String>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = state
        .catalog
        .find_movie(&id)
        .await
        .map_err(|e| ApiError::Internal {
            message: "Failed to fetch movie",
            detail: e.to_string(),
        })?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;
    Ok(Json(MovieResponse { movie }))
}

/// GET /theaters — every city with its theaters and showtimes.
pub async fn list_theaters() -> Json<TheatersResponse> {
    Json(TheatersResponse {
        theaters: catalog::theaters(),
    })
}

/// GET /theaters/{id} — one theater and the city it belongs to.
#[tracing::instrument]
pub async fn get_theater(Path(id): Path<String>) -> Result<Json<TheaterResponse>, ApiError> {
    let (city, theater) = catalog::find_theater(&id)
        .ok_or_else(|| ApiError::NotFound("Theater not found".to_string()))?;
    Ok(Json(TheaterResponse { city, theater }))
}
