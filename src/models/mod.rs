pub mod genre;
pub mod history;
pub mod movie;
pub mod sentiment;
pub mod submission;
pub mod theme;

pub use genre::{GenreId, GenrePair};
pub use history::{HistoryEntry, HISTORY_HEADERS};
pub use movie::{CatalogMovie, DiscoverResponse, MovieRecommendation};
pub use sentiment::{AgeBracket, Sentiment};
pub use submission::{
    Notice, NoticeLevel, Submission, SubmissionForm, SubmissionPhase, SubmissionReport,
    SubmissionStatus, UserProfile, ValidationError,
};
pub use theme::Theme;
