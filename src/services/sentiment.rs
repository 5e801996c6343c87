//! Mood classification
//!
//! A [`PolarityAnalyzer`] scores free text in `[-1, 1]`; the
//! [`SentimentClassifier`] turns that score into a [`Sentiment`] by sign.

use std::collections::HashMap;
use std::sync::Arc;

use crate::models::Sentiment;

/// Scores the emotional polarity of free text
pub trait PolarityAnalyzer: Send + Sync {
    /// Returns a score in `[-1, 1]`; zero when the text carries no opinion
    fn polarity(&self, text: &str) -> f64;
}

/// Word polarities, roughly on the scale of common opinion lexicons
const LEXICON: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("blessed", 0.5),
    ("bright", 0.7),
    ("calm", 0.3),
    ("cheerful", 0.6),
    ("content", 0.3),
    ("delighted", 0.8),
    ("energetic", 0.5),
    ("excellent", 1.0),
    ("excited", 0.4),
    ("fantastic", 0.4),
    ("fine", 0.4),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("grateful", 0.6),
    ("great", 0.8),
    ("happy", 0.8),
    ("hopeful", 0.5),
    ("joy", 0.8),
    ("joyful", 0.8),
    ("love", 0.5),
    ("lovely", 0.5),
    ("lucky", 0.5),
    ("nice", 0.6),
    ("ok", 0.5),
    ("okay", 0.5),
    ("peaceful", 0.5),
    ("perfect", 1.0),
    ("pleased", 0.5),
    ("proud", 0.8),
    ("relaxed", 0.4),
    ("wonderful", 1.0),
    ("afraid", -0.6),
    ("angry", -0.5),
    ("annoyed", -0.4),
    ("anxious", -0.25),
    ("awful", -1.0),
    ("bad", -0.7),
    ("bored", -0.5),
    ("boring", -1.0),
    ("broken", -0.4),
    ("depressed", -0.7),
    ("disappointed", -0.75),
    ("down", -0.16),
    ("exhausted", -0.4),
    ("frustrated", -0.7),
    ("gloomy", -0.6),
    ("hate", -0.8),
    ("heartbroken", -0.9),
    ("horrible", -1.0),
    ("hurt", -0.5),
    ("lonely", -0.5),
    ("lost", -0.3),
    ("miserable", -1.0),
    ("nervous", -0.3),
    ("sad", -0.5),
    ("scared", -0.6),
    ("sick", -0.7),
    ("stressed", -0.5),
    ("terrible", -1.0),
    ("tired", -0.4),
    ("unhappy", -0.6),
    ("upset", -0.6),
    ("worried", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "neither", "nor", "dont", "cant", "wont", "isnt",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("extremely", 1.5),
    ("super", 1.3),
    ("totally", 1.3),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("little", 0.5),
];

/// Lexicon-based polarity scorer
///
/// A negator before a scored word flips and halves it; an intensifier scales
/// it. The text score is the mean of all scored words.
pub struct LexiconAnalyzer {
    lexicon: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PolarityAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> f64 {
        let normalized = text.to_lowercase().replace('\u{2019}', "'");
        let tokens = normalized
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty());

        let mut scores = Vec::new();
        let mut negated = false;
        let mut intensity = 1.0;

        for token in tokens {
            if NEGATORS.contains(&token) || token.ends_with("n't") {
                negated = true;
                continue;
            }
            if let Some(factor) = self.intensifiers.get(token) {
                intensity *= factor;
                continue;
            }
            if let Some(polarity) = self.lexicon.get(token) {
                let mut score = polarity * intensity;
                if negated {
                    score *= -0.5;
                }
                scores.push(score.clamp(-1.0, 1.0));
                negated = false;
                intensity = 1.0;
            }
        }

        if scores.is_empty() {
            return 0.0;
        }
        (scores.iter().sum::<f64>() / scores.len() as f64).clamp(-1.0, 1.0)
    }
}

/// Maps free text onto one of the three mood labels
#[derive(Clone)]
pub struct SentimentClassifier {
    analyzer: Arc<dyn PolarityAnalyzer>,
}

impl SentimentClassifier {
    pub fn new(analyzer: Arc<dyn PolarityAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Never fails: text with no scored words is neutral
    pub fn classify(&self, text: &str) -> Sentiment {
        let polarity = self.analyzer.polarity(text);
        let sentiment = Sentiment::from_polarity(polarity);
        tracing::debug!(polarity, sentiment = %sentiment, "Classified mood text");
        sentiment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPolarity(f64);

    impl PolarityAnalyzer for FixedPolarity {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    fn classify_with(polarity: f64) -> Sentiment {
        SentimentClassifier::new(Arc::new(FixedPolarity(polarity))).classify("anything")
    }

    #[test]
    fn test_classifier_uses_sign_of_polarity() {
        assert_eq!(classify_with(0.35), Sentiment::Positive);
        assert_eq!(classify_with(0.0), Sentiment::Neutral);
        assert_eq!(classify_with(-0.2), Sentiment::Negative);
    }

    #[test]
    fn test_lexicon_positive_text() {
        let analyzer = LexiconAnalyzer::new();
        assert!(analyzer.polarity("I feel great and happy today!") > 0.0);
    }

    #[test]
    fn test_lexicon_negative_text() {
        let analyzer = LexiconAnalyzer::new();
        assert!(analyzer.polarity("Sad, tired and lonely.") < 0.0);
    }

    #[test]
    fn test_lexicon_no_opinion_is_zero() {
        let analyzer = LexiconAnalyzer::new();
        assert_eq!(analyzer.polarity("I went to the store on Tuesday"), 0.0);
        assert_eq!(analyzer.polarity("asdkjh qwpoeiru"), 0.0);
    }

    #[test]
    fn test_lexicon_negation_flips() {
        let analyzer = LexiconAnalyzer::new();
        assert!(analyzer.polarity("I am not happy") < 0.0);
        assert!(analyzer.polarity("It wasn't bad at all") > 0.0);
        assert!(analyzer.polarity("I don\u{2019}t feel good") < 0.0);
    }

    #[test]
    fn test_lexicon_intensifier_scales() {
        let analyzer = LexiconAnalyzer::new();
        let plain = analyzer.polarity("good");
        let strong = analyzer.polarity("very good");
        assert!(strong > plain);
        assert!(strong <= 1.0);
    }

    #[test]
    fn test_lexicon_score_is_bounded() {
        let analyzer = LexiconAnalyzer::new();
        let score = analyzer.polarity("extremely extremely extremely awesome perfect best");
        assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn test_classifier_with_lexicon() {
        let classifier = SentimentClassifier::new(Arc::new(LexiconAnalyzer::new()));
        assert_eq!(classifier.classify("what a wonderful day"), Sentiment::Positive);
        assert_eq!(classifier.classify("just a regular Monday"), Sentiment::Neutral);
        assert_eq!(classifier.classify("I feel awful"), Sentiment::Negative);
    }
}
