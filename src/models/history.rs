use serde::{Deserialize, Serialize};

/// A persisted recommendation as listed in the history view
///
/// Column order matches the history table and the CSV export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct HistoryEntry {
    pub user_name: String,
    pub user_age: u32,
    pub user_gender: String,
    pub sentiment: String,
    pub movie_title: String,
    pub release_date: String,
    pub rating: f64,
}

/// Column headers shared by the history view and the CSV export
pub const HISTORY_HEADERS: [&str; 7] = [
    "Name",
    "Age",
    "Gender",
    "Sentiment",
    "Movie Title",
    "Release Date",
    "Rating",
];
