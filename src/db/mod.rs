pub mod recommendations;
pub mod sqlite;

pub use recommendations::RecommendationStore;
pub use sqlite::create_pool;
