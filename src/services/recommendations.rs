use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{MovieRecommendation, Sentiment},
    services::{genre_mapper::genre_pair, providers::MovieCatalog},
};

/// Maximum number of recommendation cards per submission
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Turns a mood and an age into movie recommendations
///
/// Looks up the genre pair, asks the catalog for one page of popular movies
/// matching both genres, and keeps the first five.
#[derive(Clone)]
pub struct RecommendationService {
    catalog: Arc<dyn MovieCatalog>,
    image_base_url: String,
}

impl RecommendationService {
    pub fn new(catalog: Arc<dyn MovieCatalog>, image_base_url: String) -> Self {
        Self {
            catalog,
            image_base_url,
        }
    }

    /// Fetches recommendations, surfacing catalog failures to the caller
    pub async fn try_recommend(
        &self,
        sentiment: Sentiment,
        age: u32,
    ) -> AppResult<Vec<MovieRecommendation>> {
        let genres = genre_pair(sentiment, age);
        let movies = self.catalog.discover(&genres).await?;

        let recommendations: Vec<MovieRecommendation> = movies
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .filter_map(|movie| {
                let converted = MovieRecommendation::from_catalog(movie, &self.image_base_url);
                if converted.is_none() {
                    tracing::debug!("Dropping catalog entry without a title");
                }
                converted
            })
            .collect();

        tracing::info!(
            sentiment = %sentiment,
            age,
            genres = %genres.to_query_value(),
            results = recommendations.len(),
            provider = self.catalog.name(),
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    /// Best-effort fetch: any failure is logged and yields an empty list
    ///
    /// An empty result therefore means either "no matches" or "fetch failed".
    pub async fn recommend(&self, sentiment: Sentiment, age: u32) -> Vec<MovieRecommendation> {
        match self.try_recommend(sentiment, age).await {
            Ok(recommendations) => recommendations,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = self.catalog.name(),
                    "Error fetching recommendations"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{CatalogMovie, GenreId, GenrePair};
    use crate::services::providers::MockMovieCatalog;

    const IMAGE_BASE: &str = "http://img.test/w200";

    fn catalog_movies(count: usize) -> Vec<CatalogMovie> {
        (1..=count)
            .map(|i| CatalogMovie {
                title: Some(format!("Movie {}", i)),
                overview: Some(format!("Overview {}", i)),
                release_date: Some(format!("2020-01-{:02}", i)),
                vote_average: Some(i as f64),
                poster_path: Some(format!("/p{}.jpg", i)),
            })
            .collect()
    }

    fn service_with(mock: MockMovieCatalog) -> RecommendationService {
        RecommendationService::new(Arc::new(mock), IMAGE_BASE.to_string())
    }

    #[tokio::test]
    async fn test_truncates_to_first_five_in_order() {
        let mut mock = MockMovieCatalog::new();
        mock.expect_name().return_const("mock");
        mock.expect_discover()
            .times(1)
            .returning(|_| Ok(catalog_movies(7)));

        let recs = service_with(mock)
            .try_recommend(Sentiment::Positive, 30)
            .await
            .unwrap();

        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Movie 1", "Movie 2", "Movie 3", "Movie 4", "Movie 5"]);
        assert_eq!(recs[0].poster_url.as_deref(), Some("http://img.test/w200/p1.jpg"));
    }

    #[tokio::test]
    async fn test_queries_with_mapped_genre_pair() {
        let mut mock = MockMovieCatalog::new();
        mock.expect_name().return_const("mock");
        mock.expect_discover()
            .withf(|genres: &GenrePair| {
                genres.by_sentiment == GenreId::DRAMA && genres.by_age == GenreId::ROMANCE
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let recs = service_with(mock).recommend(Sentiment::Negative, 16).await;
        assert!(recs.is_empty());
    }

    #[tokio::test]
    async fn test_missing_fields_get_defaults() {
        let mut mock = MockMovieCatalog::new();
        mock.expect_name().return_const("mock");
        mock.expect_discover().returning(|_| {
            Ok(vec![CatalogMovie {
                title: Some("Bare".to_string()),
                ..Default::default()
            }])
        });

        let recs = service_with(mock).recommend(Sentiment::Neutral, 10).await;
        assert_eq!(
            recs,
            vec![MovieRecommendation {
                title: "Bare".to_string(),
                overview: "No description".to_string(),
                release_date: "Unknown".to_string(),
                rating: 0.0,
                poster_url: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_best_effort_swallows_failures() {
        let mut mock = MockMovieCatalog::new();
        mock.expect_name().return_const("mock");
        mock.expect_discover()
            .times(2)
            .returning(|_| Err(AppError::ExternalApi("status 401".to_string())));

        let service = service_with(mock);
        assert!(service.recommend(Sentiment::Positive, 25).await.is_empty());
        assert!(matches!(
            service.try_recommend(Sentiment::Positive, 25).await,
            Err(AppError::ExternalApi(_))
        ));
    }
}
