//! Lexicon-based sentiment and crisis classifier.
//!
//! Everything here is fixed word lists and substring checks; there is no
//! model and no state. Crisis phrases not on the list are not detected, which
//! is a known limitation of lexicon matching rather than an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::alerts::{CrisisAlert, CrisisAlertSink};

const POSITIVE_WORDS: &[&str] = &[
    "happy", "good", "great", "fantastic", "joy", "joyful", "glad", "pleased", "love", "excited",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "down", "depressed", "unhappy", "angry", "annoyed", "tired", "anxious", "stressed",
    "lonely",
];

const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end it all",
    "want to die",
    "better off dead",
    "no reason to live",
    "self harm",
    "hurt myself",
    "overdose",
];

/// Inputs shorter than this (after trimming) get the fixed neutral result.
const MIN_TEXT_CHARS: usize = 3;
const MAX_DETECTED_TERMS: usize = 5;
const TOKEN_PUNCTUATION: &[char] = &['.', ',', '!', '?', '"', '\'', '(', ')'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sentiment label `{0}`")]
pub struct UnknownLabel(pub String);

impl FromStr for SentimentLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(UnknownLabel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
}

impl SentimentScores {
    pub fn total(&self) -> f64 {
        self.negative + self.neutral + self.positive
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    pub scores: SentimentScores,
    pub detected_terms: Vec<String>,
    pub crisis_flag: bool,
    pub crisis_terms: Vec<String>,
}

impl Classification {
    /// Result for empty or trivially short input.
    pub fn neutral() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            scores: SentimentScores {
                negative: 0.33,
                neutral: 0.34,
                positive: 0.33,
            },
            detected_terms: Vec::new(),
            crisis_flag: false,
            crisis_terms: Vec::new(),
        }
    }
}

/// Classifies `text`. A crisis match is always logged at error level.
pub fn classify(text: &str) -> Classification {
    if text.trim().chars().count() < MIN_TEXT_CHARS {
        return Classification::neutral();
    }

    let lowered = text.to_lowercase();

    let (pos, neg) = lowered
        .split_whitespace()
        .map(|token| token.trim_matches(TOKEN_PUNCTUATION))
        .fold((0usize, 0usize), |(pos, neg), token| {
            if POSITIVE_WORDS.contains(&token) {
                (pos + 1, neg)
            } else if NEGATIVE_WORDS.contains(&token) {
                (pos, neg + 1)
            } else {
                (pos, neg)
            }
        });

    let total = (pos + neg).max(1) as f64;
    let positive = pos as f64 / total;
    let negative = neg as f64 / total;
    let neutral = (1.0 - positive - negative).max(0.0);

    let label = match pos.cmp(&neg) {
        std::cmp::Ordering::Greater => SentimentLabel::Positive,
        std::cmp::Ordering::Less => SentimentLabel::Negative,
        std::cmp::Ordering::Equal => SentimentLabel::Neutral,
    };

    let crisis_terms: Vec<String> = CRISIS_PHRASES
        .iter()
        .filter(|phrase| lowered.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect();
    let crisis_flag = !crisis_terms.is_empty();

    if crisis_flag {
        tracing::error!(
            target: "crisis",
            terms = ?crisis_terms,
            label = %label,
            "Crisis language detected"
        );
    }

    Classification {
        label,
        scores: SentimentScores {
            negative,
            neutral,
            positive,
        },
        detected_terms: detected_terms(&lowered),
        crisis_flag,
        crisis_terms,
    }
}

/// Like [`classify`], and also hands any crisis match to `sink`.
pub fn classify_with_alerts(
    text: &str,
    user_id: Option<Uuid>,
    sink: &dyn CrisisAlertSink,
) -> Classification {
    let classification = classify(text);
    if classification.crisis_flag {
        sink.raise(&CrisisAlert {
            user_id,
            label: classification.label,
            terms: &classification.crisis_terms,
        });
    }
    classification
}

// Substring matches, so "unhappy" also reports "happy".
fn detected_terms(lowered: &str) -> Vec<String> {
    let mut terms: Vec<String> = NEGATIVE_WORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .map(|word| word.to_string())
        .collect();

    for word in POSITIVE_WORDS {
        if lowered.contains(word) && !terms.iter().any(|t| t == word) {
            terms.push(word.to_string());
        }
    }

    terms.truncate(MAX_DETECTED_TERMS);
    terms
}
