use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// SQLite connection URL for the recommendation history
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// TMDB API base URL
    #[serde(default = "default_catalog_api_url")]
    pub catalog_api_url: String,

    /// Base URL that poster paths are appended to
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Text file holding a `tmdb api key: <value>` line
    #[serde(default = "default_api_key_file")]
    pub api_key_file: PathBuf,

    /// Overrides the credential file when set
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// Destination of the history CSV export
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,

    /// Connect/read timeout for catalog requests
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_database_url() -> String {
    "sqlite://movies.db?mode=rwc".to_string()
}

fn default_catalog_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w200".to_string()
}

fn default_api_key_file() -> PathBuf {
    PathBuf::from("apikeytmdb.txt")
}

fn default_export_path() -> PathBuf {
    PathBuf::from("recommendation_history.csv")
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            catalog_api_url: default_catalog_api_url(),
            image_base_url: default_image_base_url(),
            api_key_file: default_api_key_file(),
            tmdb_api_key: None,
            export_path: default_export_path(),
            request_timeout_secs: default_request_timeout_secs(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolves the catalog API key
    ///
    /// An empty key is returned when nothing is configured; catalog queries
    /// will then be rejected upstream.
    pub fn api_key(&self) -> String {
        if let Some(key) = self.tmdb_api_key.as_deref().map(str::trim) {
            if !key.is_empty() {
                return key.to_string();
            }
        }
        read_api_key(&self.api_key_file)
    }
}

/// Reads the API key from a credential file, logging and returning an empty
/// key on any failure
pub fn read_api_key(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_api_key(&contents).unwrap_or_else(|| {
            tracing::warn!(path = %path.display(), "No usable TMDB API key line in credential file");
            String::new()
        }),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Error reading TMDB API key");
            String::new()
        }
    }
}

/// Only the first line starting with `tmdb api key` (any case) is considered.
pub fn parse_api_key(contents: &str) -> Option<String> {
    let line = contents
        .lines()
        .find(|line| line.to_lowercase().starts_with("tmdb api key"))?;
    line.split_once(':').map(|(_, value)| value.trim().to_string())
}
