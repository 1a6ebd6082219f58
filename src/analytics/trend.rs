//! Sentiment trend and risk estimation over a classification history.
//!
//! Histories are ordered oldest first, newest last.

use serde::Serialize;

use super::sentiment::{Classification, SentimentLabel};

const TREND_SHARE: f64 = 0.6;
const HIGH_RISK_SHARE: f64 = 0.8;
const MEDIUM_RISK_SHARE: f64 = 0.6;
const HIGH_RISK_STREAK: usize = 5;
const MEDIUM_RISK_STREAK: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Declining,
    /// Only reported for an empty history.
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub trend: Trend,
    pub risk_level: RiskLevel,
    pub average_negative_score: f64,
    pub consecutive_negative: usize,
    pub total_entries: usize,
    pub negative_count: usize,
    pub positive_count: usize,
}

impl TrendReport {
    fn empty() -> Self {
        Self {
            trend: Trend::Neutral,
            risk_level: RiskLevel::Low,
            average_negative_score: 0.0,
            consecutive_negative: 0,
            total_entries: 0,
            negative_count: 0,
            positive_count: 0,
        }
    }
}

pub fn estimate(history: &[Classification]) -> TrendReport {
    estimate_labels(history.iter().map(|c| (c.label, c.scores.negative)))
}

/// Same as [`estimate`] for callers holding only `(label, negative score)`
/// pairs, e.g. labels stored alongside journal entries.
pub fn estimate_labels<I>(history: I) -> TrendReport
where
    I: IntoIterator<Item = (SentimentLabel, f64)>,
{
    let entries: Vec<(SentimentLabel, f64)> = history.into_iter().collect();
    if entries.is_empty() {
        return TrendReport::empty();
    }

    let total = entries.len();
    let negative_count = entries
        .iter()
        .filter(|(label, _)| *label == SentimentLabel::Negative)
        .count();
    let positive_count = entries
        .iter()
        .filter(|(label, _)| *label == SentimentLabel::Positive)
        .count();

    // Longest negative run seen walking back from the newest entry.
    let mut consecutive_negative = 0usize;
    let mut run = 0usize;
    for (label, _) in entries.iter().rev() {
        if *label == SentimentLabel::Negative {
            run += 1;
            consecutive_negative = consecutive_negative.max(run);
        } else {
            run = 0;
        }
    }

    let population = total as f64;
    let exceeds = |count: usize, share: f64| count as f64 > population * share;

    let trend = if exceeds(negative_count, TREND_SHARE) {
        Trend::Declining
    } else if exceeds(positive_count, TREND_SHARE) {
        Trend::Improving
    } else {
        Trend::Stable
    };

    let risk_level = if consecutive_negative >= HIGH_RISK_STREAK
        || exceeds(negative_count, HIGH_RISK_SHARE)
    {
        RiskLevel::High
    } else if consecutive_negative >= MEDIUM_RISK_STREAK
        || exceeds(negative_count, MEDIUM_RISK_SHARE)
    {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    let average_negative_score =
        entries.iter().map(|(_, negative)| negative).sum::<f64>() / population;

    TrendReport {
        trend,
        risk_level,
        average_negative_score,
        consecutive_negative,
        total_entries: total,
        negative_count,
        positive_count,
    }
}
