use serde::{Deserialize, Serialize};

pub const DEFAULT_OVERVIEW: &str = "No description";
pub const DEFAULT_RELEASE_DATE: &str = "Unknown";

// ============================================================================
// TMDB API Types
// ============================================================================

/// Raw response from GET /discover/movie
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub results: Vec<CatalogMovie>,
}

/// One entry of the discover `results` array
///
/// Every field is optional here; defaults are applied when the entry is turned
/// into a [`MovieRecommendation`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogMovie {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// A movie shown to the user as one recommendation card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecommendation {
    pub title: String,
    pub overview: String,
    pub release_date: String,
    /// Catalog vote average, 0 to 10
    pub rating: f64,
    pub poster_url: Option<String>,
}

impl MovieRecommendation {
    /// Converts a catalog entry, filling in defaults for missing fields
    ///
    /// Returns `None` when the entry has no usable title.
    pub fn from_catalog(movie: CatalogMovie, image_base_url: &str) -> Option<Self> {
        let title = non_blank(movie.title)?;

        let poster_url = non_blank(movie.poster_path).map(|path| {
            format!(
                "{}/{}",
                image_base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        });

        Some(Self {
            title,
            overview: non_blank(movie.overview).unwrap_or_else(|| DEFAULT_OVERVIEW.to_string()),
            release_date: non_blank(movie.release_date)
                .unwrap_or_else(|| DEFAULT_RELEASE_DATE.to_string()),
            rating: movie.vote_average.unwrap_or(0.0),
            poster_url,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
