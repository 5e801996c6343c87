use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Discrete mood derived from the sign of a polarity score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Applies the sign rule: positive above zero, neutral at zero, negative otherwise
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity == 0.0 {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Text for the detected-mood indicator
    pub fn mood_banner(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Detected mood: Positive 😊",
            Sentiment::Neutral => "Detected mood: Neutral 😐",
            Sentiment::Negative => "Detected mood: Negative 🙁",
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Age group used to pick the second genre of a recommendation query
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AgeBracket {
    Child,
    Teen,
    Adult,
}

impl AgeBracket {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=12 => AgeBracket::Child,
            13..=19 => AgeBracket::Teen,
            _ => AgeBracket::Adult,
        }
    }
}

impl Display for AgeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeBracket::Child => write!(f, "child"),
            AgeBracket::Teen => write!(f, "teen"),
            AgeBracket::Adult => write!(f, "adult"),
        }
    }
}
