//! Catalog data served alongside the seat ledger.
//!
//! Theaters and showtimes are fixed. Movies come from the live TVMaze
//! listing, or from several bundled mock sources with different shapes when
//! it is unreachable, and are normalized into one [`Movie`] type.

pub mod error;
pub mod movies;
pub mod theaters;
pub mod tvmaze;

pub use error::CatalogError;
pub use movies::{LIVE_SHOW_LIMIT, Movie, MovieCatalog, mock_movies};
pub use theaters::{CityTheaters, SHOWTIMES, Theater, find_theater, theaters};
pub use tvmaze::{TVMAZE_BASE_URL, TvMazeClient, TvMazeShow};
