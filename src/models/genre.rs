use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Catalog-defined genre identifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct GenreId(pub u32);

impl GenreId {
    pub const ACTION: GenreId = GenreId(28);
    pub const ANIMATION: GenreId = GenreId(16);
    pub const COMEDY: GenreId = GenreId(35);
    pub const DRAMA: GenreId = GenreId(18);
    pub const ROMANCE: GenreId = GenreId(10749);
}

impl Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two genres a catalog query must match together
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenrePair {
    pub by_sentiment: GenreId,
    pub by_age: GenreId,
}

impl GenrePair {
    /// Comma-joined form expected by the `with_genres` filter
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.by_sentiment, self.by_age)
    }
}
