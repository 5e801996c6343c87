/// The Movie Database (TMDB) provider
///
/// API Flow:
/// 1. Discover: /discover/movie?with_genres=a,b → up to 20 popular movies
/// 2. Poster: <image base>/<poster_path> → image bytes
use crate::{
    error::{AppError, AppResult},
    models::{CatalogMovie, DiscoverResponse, GenrePair},
    services::providers::{MovieCatalog, Poster},
};
use reqwest::Client as HttpClient;
use std::time::Duration;

const SORT_BY: &str = "popularity.desc";
const LANGUAGE: &str = "en-US";
const FIRST_PAGE: &str = "1";
const DEFAULT_POSTER_TYPE: &str = "image/jpeg";

#[derive(Clone)]
pub struct TmdbCatalog {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
}

impl TmdbCatalog {
    /// Creates a TMDB client whose requests give up after `timeout`
    pub fn new(
        api_key: String,
        api_url: String,
        image_base_url: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        if api_key.is_empty() {
            tracing::warn!("TMDB API key is empty; catalog requests will be rejected");
        }

        let http_client = HttpClient::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            image_base_url: image_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn poster_url(&self, poster_path: &str) -> String {
        format!(
            "{}/{}",
            self.image_base_url,
            poster_path.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn discover(&self, genres: &GenrePair) -> AppResult<Vec<CatalogMovie>> {
        let url = format!("{}/discover/movie", self.api_url);
        let with_genres = genres.to_query_value();

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("with_genres", with_genres.as_str()),
                ("sort_by", SORT_BY),
                ("language", LANGUAGE),
                ("page", FIRST_PAGE),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw TMDB discover response");

        let discover: DiscoverResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(error = %e, "Failed to deserialize TMDB response");
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })?;

        tracing::info!(
            genres = %with_genres,
            results = discover.results.len(),
            provider = "tmdb",
            "Discover completed"
        );

        Ok(discover.results)
    }

    async fn fetch_poster(&self, poster_path: &str) -> AppResult<Poster> {
        let url = self.poster_url(poster_path);
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "TMDB image server returned status {} for {}",
                response.status(),
                poster_path
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_POSTER_TYPE)
            .to_string();
        let bytes = response.bytes().await?.to_vec();

        tracing::debug!(poster_path = %poster_path, size = bytes.len(), "Poster fetched");

        Ok(Poster {
            content_type,
            bytes,
        })
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenreId;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn comedy_drama() -> GenrePair {
        GenrePair {
            by_sentiment: GenreId::COMEDY,
            by_age: GenreId::DRAMA,
        }
    }

    /// Answers a single request with `status` and `body`, yielding the
    /// request line that was received
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = socket.read(&mut chunk).await.unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (format!("http://{}", addr), server)
    }

    fn assert_discover_request(request_line: &str) {
        assert!(request_line.starts_with("GET /discover/movie?"), "{}", request_line);
        for param in [
            "api_key=test_key",
            "with_genres=35%2C18",
            "sort_by=popularity.desc",
            "language=en-US",
            "page=1",
        ] {
            assert!(request_line.contains(param), "{} missing from {}", param, request_line);
        }
    }

    fn create_test_catalog(api_url: &str) -> TmdbCatalog {
        TmdbCatalog::new(
            "test_key".to_string(),
            api_url.to_string(),
            "http://images.test.local/t/p/w200/".to_string(),
            Duration::from_secs(2),
        )
        .unwrap()
    }

    #[test]
    fn test_poster_url_joins_with_single_slash() {
        let catalog = create_test_catalog("http://test.local");
        assert_eq!(
            catalog.poster_url("/abc.jpg"),
            "http://images.test.local/t/p/w200/abc.jpg"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed_from_api_url() {
        let catalog = create_test_catalog("http://test.local/3/");
        assert_eq!(catalog.api_url, "http://test.local/3");
    }

    #[tokio::test]
    async fn test_discover_network_failure_is_an_error() {
        // Nothing listens on port 1
        let catalog = create_test_catalog("http://127.0.0.1:1");

        let result = catalog.discover(&comedy_drama()).await;
        assert!(matches!(result, Err(AppError::HttpClient(_))));
    }

    #[tokio::test]
    async fn test_discover_rejected_key_is_an_error() {
        let (url, server) = serve_once("401 Unauthorized", "nokey").await;
        let catalog = create_test_catalog(&url);

        let result = catalog.discover(&comedy_drama()).await;
        match result {
            Err(AppError::ExternalApi(message)) => {
                assert!(message.contains("401"), "{}", message);
                assert!(message.ends_with("nokey"), "{}", message);
            }
            other => panic!("expected ExternalApi error, got {:?}", other),
        }

        assert_discover_request(&server.await.unwrap());
    }

    #[tokio::test]
    async fn test_discover_malformed_json_is_an_error() {
        let (url, server) = serve_once("200 OK", "{oops:1").await;
        let catalog = create_test_catalog(&url);

        let result = catalog.discover(&comedy_drama()).await;
        match result {
            Err(AppError::ExternalApi(message)) => {
                assert!(message.starts_with("Failed to parse TMDB response"), "{}", message);
            }
            other => panic!("expected ExternalApi error, got {:?}", other),
        }

        assert_discover_request(&server.await.unwrap());
    }

    #[tokio::test]
    async fn test_discover_without_results_is_empty() {
        let (url, server) = serve_once("200 OK", "{}").await;
        let catalog = create_test_catalog(&url);

        let movies = catalog.discover(&comedy_drama()).await.unwrap();
        assert!(movies.is_empty());

        assert_discover_request(&server.await.unwrap());
    }

    #[tokio::test]
    async fn test_fetch_poster_network_failure_is_an_error() {
        let catalog = TmdbCatalog::new(
            String::new(),
            "http://127.0.0.1:1".to_string(),
            "http://127.0.0.1:1/w200".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();

        tokio_test::assert_err!(catalog.fetch_poster("/missing.jpg").await);
    }
}
