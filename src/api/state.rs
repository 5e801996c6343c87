use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::Config,
    db::RecommendationStore,
    models::Theme,
    services::{
        providers::MovieCatalog, LexiconAnalyzer, PolarityAnalyzer, RecommendationService,
        SentimentClassifier, SubmissionController,
    },
};

/// Shared application context
///
/// Created once at startup and handed to every handler; [`AppState::shutdown`]
/// releases the database handle.
#[derive(Clone)]
pub struct AppState {
    pub submissions: Arc<SubmissionController>,
    pub store: RecommendationStore,
    pub catalog: Arc<dyn MovieCatalog>,
    pub export_path: PathBuf,
    pub theme: Arc<RwLock<Theme>>,
}

impl AppState {
    /// Wires the pipeline with the bundled lexicon analyzer
    pub fn new(
        config: &Config,
        store: RecommendationStore,
        catalog: Arc<dyn MovieCatalog>,
    ) -> Self {
        Self::with_analyzer(config, store, catalog, Arc::new(LexiconAnalyzer::new()))
    }

    pub fn with_analyzer(
        config: &Config,
        store: RecommendationStore,
        catalog: Arc<dyn MovieCatalog>,
        analyzer: Arc<dyn PolarityAnalyzer>,
    ) -> Self {
        let recommender =
            RecommendationService::new(catalog.clone(), config.image_base_url.clone());
        let submissions = SubmissionController::new(
            SentimentClassifier::new(analyzer),
            recommender,
            store.clone(),
        );

        Self {
            submissions: Arc::new(submissions),
            store,
            catalog,
            export_path: config.export_path.clone(),
            theme: Arc::new(RwLock::new(Theme::default())),
        }
    }

    pub async fn shutdown(&self) {
        self.store.close().await;
        tracing::info!("Recommendation store closed");
    }
}
