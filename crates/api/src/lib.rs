//! HTTP API server for movie seat booking.
//!
//! Serves the movie and theater catalog and exposes the seat ledger through
//! the booking endpoints, with structured logging (tracing) and Prometheus
//! metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use catalog::{CatalogError, MovieCatalog};
use ledger::{InMemorySeatLedger, SeatLedger};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::bookings::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<L: SeatLedger + 'static>(
    state: Arc<AppState<L>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let theater_router = Router::new()
        .route("/theaters", get(routes::catalog::list_theaters))
        .route("/theaters/{id}", get(routes::catalog::get_theater));

    Router::new()
        .route("/", get(routes::health::root))
        .route("/health", get(routes::health::check))
        .route("/book-seat", post(routes::bookings::book_seat::<L>))
        .route("/booked-seats", get(routes::bookings::booked_seats::<L>))
        .route("/movies", get(routes::catalog::list_movies::<L>))
        .route("/movies/{id}", get(routes::catalog::get_movie::<L>))
        .with_state(state)
        .merge(theater_router)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by an in-memory ledger.
///
/// Claimed seats live as long as the process; a restart empties the ledger.
pub fn create_default_state(catalog: MovieCatalog) -> Arc<AppState<InMemorySeatLedger>> {
    Arc::new(AppState {
        ledger: InMemorySeatLedger::new(),
        catalog,
    })
}

/// Builds the movie catalog described by `config`.
pub fn create_catalog(config: &Config) -> Result<MovieCatalog, CatalogError> {
    match &config.tvmaze_url {
        Some(url) => MovieCatalog::with_tvmaze(url.as_str()),
        None => Ok(MovieCatalog::offline()),
    }
}
