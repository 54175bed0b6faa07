use thiserror::Error;

/// Errors raised while loading catalog sources.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A bundled source document could not be decoded.
    #[error("Failed to decode {source_name} movies: {error}")]
    Decode {
        source_name: &'static str,
        #[source]
        error: serde_json::Error,
    },

    /// The live source could not be reached or returned an unreadable body.
    #[error("Movie source request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The live source answered with a non-success status.
    #[error("Movie source returned HTTP {status}")]
    Status { status: u16 },
}
