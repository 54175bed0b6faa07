//! Movie catalog normalized from several source shapes.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::CatalogError;
use crate::tvmaze::TvMazeClient;

/// A movie in the shape served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub poster: String,
    pub genre: Vec<String>,
    /// Runtime in minutes.
    pub duration: u32,
    pub rating: f64,
    pub description: String,
}

// -- Source shapes --

#[derive(Debug, Deserialize)]
struct TmdbMovie {
    id: u64,
    title: String,
    poster_path: String,
    genre_ids: Vec<String>,
    runtime: u32,
    vote_average: f64,
    overview: String,
}

impl From<TmdbMovie> for Movie {
    fn from(m: TmdbMovie) -> Self {
        Self {
            id: format!("tmdb-{}", m.id),
            title: m.title,
            poster: m.poster_path,
            genre: m.genre_ids,
            duration: m.runtime,
            rating: m.vote_average,
            description: m.overview,
        }
    }
}

#[derive(Deserialize)]
struct PublicJsonMovie {
    movie_id: String,
    name: String,
    poster: String,
    /// Comma-separated genre list.
    category: String,
    length_minutes: u32,
    rating: f64,
    description: String,
}

impl From<PublicJsonMovie> for Movie {
    fn from(m: PublicJsonMovie) -> Self {
        Self {
            id: format!("public-{}", m.movie_id),
            title: m.name,
            poster: m.poster,
            genre: m
                .category
                .split(',')
                .map(|g| g.trim().to_string())
                .filter(|g| !g.is_empty())
                .collect(),
            duration: m.length_minutes,
            rating: m.rating,
            description: m.description,
        }
    }
}

/// Already in catalog shape; decoded straight into [`Movie`].
type StaticMovie = Movie;

fn decode<T: DeserializeOwned>(
    source_name: &'static str,
    document: serde_json::Value,
) -> Result<Vec<T>, CatalogError> {
    serde_json::from_value(document).map_err(|error| CatalogError::Decode { source_name, error })
}

fn tmdb_source() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "title": "The Galactic Odyssey",
            "poster_path": "https://dummyimage.com/400x600/020617/38bdf8&text=The+Galactic+Odyssey",
            "genre_ids": ["Science Fiction", "Adventure"],
            "runtime": 132,
            "vote_average": 8.4,
            "overview": "A crew of explorers travel through a newly discovered wormhole, facing the edges of space and time."
        },
        {
            "id": 2,
            "title": "Midnight Heist",
            "poster_path": "https://dummyimage.com/400x600/020617/f97316&text=Midnight+Heist",
            "genre_ids": ["Action", "Thriller"],
            "runtime": 108,
            "vote_average": 7.6,
            "overview": "A team of expert thieves plan the ultimate museum robbery on the night of a once-in-a-lifetime storm."
        },
        {
            "id": 3,
            "title": "Laugh Till Monday",
            "poster_path": "https://dummyimage.com/400x600/020617/22c55e&text=Laugh+Till+Monday",
            "genre_ids": ["Comedy", "Romance"],
            "runtime": 101,
            "vote_average": 7.2,
            "overview": "Two strangers stuck in an airport over the weekend form an unlikely bond over a series of comic mishaps."
        }
    ])
}

fn public_json_source() -> serde_json::Value {
    json!([
        {
            "movie_id": "A-100",
            "name": "Hidden Frequencies",
            "poster": "https://dummyimage.com/400x600/1e293b/ffffff&text=Hidden+Frequencies",
            "category": "Mystery, Drama",
            "length_minutes": 118,
            "rating": 8.1,
            "description": "A sound engineer discovers a pattern in random radio noise that could expose a global conspiracy."
        },
        {
            "movie_id": "A-101",
            "name": "City of Echoes",
            "poster": "https://dummyimage.com/400x600/0f766e/ffffff&text=City+of+Echoes",
            "category": "Drama",
            "length_minutes": 124,
            "rating": 8.7,
            "description": "Four strangers in a bustling metropolis discover their lives are more connected than they imagined."
        },
        {
            "movie_id": "A-102",
            "name": "Pixel Raiders",
            "poster": "https://dummyimage.com/400x600/b91c1c/ffffff&text=Pixel+Raiders",
            "category": "Action, Sci-Fi",
            "length_minutes": 110,
            "rating": 7.9,
            "description": "Professional gamers are recruited to pilot experimental drones in a real-world defense mission."
        }
    ])
}

fn static_source() -> serde_json::Value {
    json!([
        {
            "id": "EX-201",
            "title": "Silent Horizon",
            "poster": "https://dummyimage.com/400x600/111827/ffffff&text=Silent+Horizon",
            "genre": ["Drama", "Sci-Fi"],
            "duration": 130,
            "rating": 8.3,
            "description": "An astronaut stranded on a distant moon must decide between survival and saving a colony on Earth."
        },
        {
            "id": "EX-202",
            "title": "Rhythm & Rust",
            "poster": "https://dummyimage.com/400x600/4b5563/ffffff&text=Rhythm+%26+Rust",
            "genre": ["Musical", "Drama"],
            "duration": 119,
            "rating": 7.8,
            "description": "A washed-up rockstar and a street drummer team up to save a legendary music venue."
        }
    ])
}

/// Collapses movies sharing an id. A later entry replaces an earlier one
/// but keeps the earlier position.
fn dedupe_by_id(movies: impl IntoIterator<Item = Movie>) -> Vec<Movie> {
    let mut unique: Vec<Movie> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for movie in movies {
        match positions.get(&movie.id) {
            Some(&pos) => unique[pos] = movie,
            None => {
                positions.insert(movie.id.clone(), unique.len());
                unique.push(movie);
            }
        }
    }

    unique
}

/// Loads the bundled mock sources and returns them normalized and deduplicated.
#[tracing::instrument]
pub fn mock_movies() -> Result<Vec<Movie>, CatalogError> {
    let tmdb: Vec<TmdbMovie> = decode("tmdb", tmdb_source())?;
    let public: Vec<PublicJsonMovie> = decode("public-json", public_json_source())?;
    let extra: Vec<StaticMovie> = decode("static", static_source())?;

    let movies = dedupe_by_id(
        tmdb.into_iter()
            .map(Movie::from)
            .chain(public.into_iter().map(Movie::from))
            .chain(extra),
    );
    tracing::debug!(count = movies.len(), "mock movie catalog loaded");
    Ok(movies)
}

/// Number of live shows served per catalog load.
pub const LIVE_SHOW_LIMIT: usize = 10;

/// Movie catalog: the live TVMaze listing when reachable, the bundled mock
/// sources otherwise.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    live: Option<TvMazeClient>,
}

impl MovieCatalog {
    /// Creates a catalog that queries TVMaze at `base_url` first.
    pub fn with_tvmaze(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        Ok(Self {
            live: Some(TvMazeClient::new(base_url)?),
        })
    }

    /// Creates a catalog that only serves the bundled mock sources.
    pub fn offline() -> Self {
        Self::default()
    }

    /// Returns the normalized catalog.
    ///
    /// A failed or empty live fetch falls back to the mock sources.
    pub async fn movies(&self) -> Result<Vec<Movie>, CatalogError> {
        if let Some(live) = &self.live {
            match live.fetch_movies(LIVE_SHOW_LIMIT).await {
                Ok(movies) if !movies.is_empty() => return Ok(dedupe_by_id(movies)),
                Ok(_) => tracing::warn!("live movie source returned no shows, using mock data"),
                Err(error) => {
                    tracing::error!(%error, "failed to fetch live movies, using mock data");
                }
            }
        }
        mock_movies()
    }

    /// Looks up one movie by its normalized id.
    pub async fn find_movie(&self, id: &str) -> Result<Option<Movie>, CatalogError> {
        Ok(self.movies().await?.into_iter().find(|m| m.id == id))
    }
}
