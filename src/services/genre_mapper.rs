use crate::models::{AgeBracket, GenreId, GenrePair, Sentiment};

/// Genre chosen for each mood: comedy, action, drama
const SENTIMENT_GENRES: [(Sentiment, GenreId); 3] = [
    (Sentiment::Positive, GenreId::COMEDY),
    (Sentiment::Neutral, GenreId::ACTION),
    (Sentiment::Negative, GenreId::DRAMA),
];

/// Genre chosen for each age group: animation, romance, drama
const AGE_GENRES: [(AgeBracket, GenreId); 3] = [
    (AgeBracket::Child, GenreId::ANIMATION),
    (AgeBracket::Teen, GenreId::ROMANCE),
    (AgeBracket::Adult, GenreId::DRAMA),
];

/// Fallbacks match the positive and adult rows
const DEFAULT_SENTIMENT_GENRE: GenreId = GenreId::COMEDY;
const DEFAULT_AGE_GENRE: GenreId = GenreId::DRAMA;

pub fn genre_for_sentiment(sentiment: Sentiment) -> GenreId {
    SENTIMENT_GENRES
        .iter()
        .find(|(s, _)| *s == sentiment)
        .map(|(_, genre)| *genre)
        .unwrap_or(DEFAULT_SENTIMENT_GENRE)
}

pub fn genre_for_age(bracket: AgeBracket) -> GenreId {
    AGE_GENRES
        .iter()
        .find(|(b, _)| *b == bracket)
        .map(|(_, genre)| *genre)
        .unwrap_or(DEFAULT_AGE_GENRE)
}

/// Picks the genre pair for a mood and an age
pub fn genre_pair(sentiment: Sentiment, age: u32) -> GenrePair {
    GenrePair {
        by_sentiment: genre_for_sentiment(sentiment),
        by_age: genre_for_age(AgeBracket::from_age(age)),
    }
}
