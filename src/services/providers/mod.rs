/// Movie catalog abstraction
///
/// The recommendation pipeline only needs two things from a catalog: a
/// genre-filtered discovery query and poster images. Keeping them behind a
/// trait lets tests swap in a mock and keeps TMDB specifics in one module.
use crate::{
    error::AppResult,
    models::{CatalogMovie, GenrePair},
};

pub mod tmdb;

pub use tmdb::TmdbCatalog;

/// Binary poster image as served by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poster {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Trait for movie metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch one page of movies matching both genres, most popular first
    ///
    /// Entries are returned as the catalog sent them; callers apply defaults.
    async fn discover(&self, genres: &GenrePair) -> AppResult<Vec<CatalogMovie>>;

    /// Download the poster image stored under `poster_path`
    async fn fetch_poster(&self, poster_path: &str) -> AppResult<Poster>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
