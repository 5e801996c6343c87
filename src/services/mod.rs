pub mod export;
pub mod genre_mapper;
pub mod providers;
pub mod recommendations;
pub mod sentiment;
pub mod submission;

pub use recommendations::RecommendationService;
pub use sentiment::{LexiconAnalyzer, PolarityAnalyzer, SentimentClassifier};
pub use submission::SubmissionController;
