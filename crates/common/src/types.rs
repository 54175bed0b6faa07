use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator placed between the components of a [`BookingKey`].
pub const KEY_SEPARATOR: &str = "__";

/// Identifier of one physical seat within a theater layout (e.g. `"C5"`).
///
/// The ledger treats seat ids as opaque tokens; no row/column structure
/// is imposed here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    /// Creates a seat id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the seat id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SeatId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SeatId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SeatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors raised when a [`BookingKey`] cannot be formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingKeyError {
    /// A component was empty or whitespace only.
    #[error("booking key component `{component}` is empty")]
    EmptyComponent { component: &'static str },

    /// A component contains the key separator and would make keys ambiguous.
    #[error("booking key component `{component}` must not contain `__`")]
    ContainsSeparator { component: &'static str },

    /// A component starts or ends with `_`, which would merge with a separator.
    #[error("booking key component `{component}` must not start or end with `_`")]
    UnderscoreEdge { component: &'static str },

    /// A rendered key did not split into exactly four components.
    #[error("malformed booking key: {0}")]
    Malformed(String),
}

/// Identity of one sellable showtime instance.
///
/// Rendered as `movie__city__theater__showtime`. Components may not be
/// blank, contain the separator, or start or end with `_`. Every `__` in a
/// rendered key is then a separator, so two distinct tuples never render to
/// the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingKey(String);

impl BookingKey {
    /// Builds the key for a movie screening at a given theater and showtime.
    pub fn new(
        movie_id: &str,
        city: &str,
        theater_id: &str,
        showtime: &str,
    ) -> Result<Self, BookingKeyError> {
        let components = [
            ("movie_id", movie_id),
            ("city", city),
            ("theater_id", theater_id),
            ("showtime", showtime),
        ];

        for (component, value) in components {
            if value.trim().is_empty() {
                return Err(BookingKeyError::EmptyComponent { component });
            }
            if value.contains(KEY_SEPARATOR) {
                return Err(BookingKeyError::ContainsSeparator { component });
            }
            if value.starts_with('_') || value.ends_with('_') {
                return Err(BookingKeyError::UnderscoreEdge { component });
            }
        }

        Ok(Self(components.map(|(_, value)| value).join(KEY_SEPARATOR)))
    }

    /// Returns the rendered key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `[movie_id, city, theater_id, showtime]`.
    pub fn parts(&self) -> [&str; 4] {
        let mut parts = self.0.splitn(4, KEY_SEPARATOR);
        // Construction guarantees exactly four components.
        std::array::from_fn(|_| parts.next().unwrap_or_default())
    }
}

impl std::fmt::Display for BookingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookingKey {
    type Err = BookingKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(KEY_SEPARATOR).collect();
        match parts.as_slice() {
            [movie_id, city, theater_id, showtime] => {
                Self::new(movie_id, city, theater_id, showtime)
            }
            _ => Err(BookingKeyError::Malformed(s.to_string())),
        }
    }
}

impl AsRef<str> for BookingKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_key_joins_components() {
        let key = BookingKey::new("m1", "Delhi", "del-pvr-pacific", "7:30 PM").unwrap();
        assert_eq!(key.as_str(), "m1__Delhi__del-pvr-pacific__7:30 PM");
        assert_eq!(key.parts(), ["m1", "Delhi", "del-pvr-pacific", "7:30 PM"]);
    }

    #[test]
    fn same_tuple_gives_same_key() {
        let a = BookingKey::new("tmdb-1", "Mumbai", "mum-pvr-icon", "1:30 PM").unwrap();
        let b = BookingKey::new("tmdb-1", "Mumbai", "mum-pvr-icon", "1:30 PM").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_showtimes_give_distinct_keys() {
        let a = BookingKey::new("tmdb-1", "Mumbai", "mum-pvr-icon", "1:30 PM").unwrap();
        let b = BookingKey::new("tmdb-1", "Mumbai", "mum-pvr-icon", "4:30 PM").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn rejects_blank_component() {
        let err = BookingKey::new("m1", "  ", "del-pvr-pacific", "7:30 PM").unwrap_err();
        assert_eq!(err, BookingKeyError::EmptyComponent { component: "city" });
    }

    #[test]
    fn rejects_separator_inside_component() {
        // "a__b" + "c" and "a" + "b__c" would otherwise collide.
        let err = BookingKey::new("a__b", "c", "t", "10:00 AM").unwrap_err();
        assert_eq!(
            err,
            BookingKeyError::ContainsSeparator {
                component: "movie_id"
            }
        );
    }

    #[test]
    fn rejects_underscore_next_to_separator() {
        // ("m_", "Delhi") and ("m", "_Delhi") would both render "m___Delhi".
        let err = BookingKey::new("m_", "Delhi", "del-pvr-pacific", "7:30 PM").unwrap_err();
        assert_eq!(
            err,
            BookingKeyError::UnderscoreEdge {
                component: "movie_id"
            }
        );

        let err = BookingKey::new("m", "_Delhi", "del-pvr-pacific", "7:30 PM").unwrap_err();
        assert_eq!(err, BookingKeyError::UnderscoreEdge { component: "city" });
    }

    #[test]
    fn inner_single_underscore_is_allowed() {
        let key = BookingKey::new("movie_1", "New_Delhi", "del_pvr", "7:30 PM").unwrap();
        assert_eq!(key.parts(), ["movie_1", "New_Delhi", "del_pvr", "7:30 PM"]);
        assert_eq!(key.as_str().parse::<BookingKey>().unwrap(), key);
    }

    #[test]
    fn parse_rejects_ambiguous_key() {
        let err = "m___Delhi__del-pvr-pacific__7:30 PM"
            .parse::<BookingKey>()
            .unwrap_err();
        assert_eq!(err, BookingKeyError::UnderscoreEdge { component: "city" });
    }

    #[test]
    fn parses_rendered_key() {
        let key: BookingKey = "m1__Delhi__del-pvr-pacific__7:30 PM".parse().unwrap();
        assert_eq!(key.parts()[2], "del-pvr-pacific");
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        let err = "m1__Delhi__7:30 PM".parse::<BookingKey>().unwrap_err();
        assert!(matches!(err, BookingKeyError::Malformed(_)));
    }

    #[test]
    fn seat_id_serializes_transparently() {
        let seat = SeatId::from("A1");
        assert_eq!(serde_json::to_string(&seat).unwrap(), "\"A1\"");
    }
}
