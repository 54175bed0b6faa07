//! Live movie source backed by the public TVMaze API.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use crate::{CatalogError, Movie};

/// Public TVMaze API root.
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

const NO_IMAGE_POSTER: &str = "https://dummyimage.com/400x600/020617/e5e7eb&text=No+Image";
const DEFAULT_GENRE: &str = "Drama";
const DEFAULT_RUNTIME: u32 = 90;
const DEFAULT_RATING: f64 = 7.0;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("HTML tag pattern is valid"));

#[derive(Debug, Default, Deserialize)]
struct TvMazeImage {
    medium: Option<String>,
    original: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TvMazeRating {
    average: Option<f64>,
}

/// A show as listed by `GET /shows`. Only the fields the catalog uses.
#[derive(Debug, Deserialize)]
pub struct TvMazeShow {
    id: u64,
    name: String,
    #[serde(default)]
    image: Option<TvMazeImage>,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    runtime: Option<u32>,
    #[serde(default)]
    rating: Option<TvMazeRating>,
    #[serde(default)]
    summary: Option<String>,
}

impl From<TvMazeShow> for Movie {
    fn from(show: TvMazeShow) -> Self {
        let poster = show
            .image
            .and_then(|image| image.medium.or(image.original))
            .unwrap_or_else(|| NO_IMAGE_POSTER.to_string());

        let description = match show.summary {
            Some(summary) => HTML_TAG.replace_all(&summary, "").into_owned(),
            None => "No description available.".to_string(),
        };

        let genre = if show.genres.is_empty() {
            vec![DEFAULT_GENRE.to_string()]
        } else {
            show.genres
        };

        Self {
            id: format!("tvmaze-{}", show.id),
            title: show.name,
            poster,
            genre,
            duration: show.runtime.filter(|&r| r > 0).unwrap_or(DEFAULT_RUNTIME),
            rating: show
                .rating
                .and_then(|r| r.average)
                .unwrap_or(DEFAULT_RATING),
            description,
        }
    }
}

/// HTTP client for the TVMaze show listing.
#[derive(Debug, Clone)]
pub struct TvMazeClient {
    http: Client,
    base_url: String,
}

impl TvMazeClient {
    /// Creates a client against `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the first page of shows and normalizes at most `limit` of them.
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_movies(&self, limit: usize) -> Result<Vec<Movie>, CatalogError> {
        let response = self
            .http
            .get(format!("{}/shows", self.base_url))
            .query(&[("page", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status {
                status: response.status().as_u16(),
            });
        }

        let shows: Vec<TvMazeShow> = response.json().await?;
        Ok(shows.into_iter().take(limit).map(Movie::from).collect())
    }
}
