//! Per-user progress analytics over mood check-ins and journal entries.
//!
//! `now` is always supplied by the caller. The aggregator never filters by
//! owner: callers pass only records belonging to the user being reported on.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::feed::{unified_feed, FeedItem};
use crate::models::journal::JournalRecord;
use crate::models::mood::MoodRecord;

const WEEK_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodBucket {
    Excellent,
    Good,
    Neutral,
    Low,
    Poor,
}

impl MoodBucket {
    /// Levels outside `1..=5` fall into `Neutral`.
    pub fn from_level(level: i32) -> Self {
        match level {
            5 => Self::Excellent,
            4 => Self::Good,
            2 => Self::Low,
            1 => Self::Poor,
            _ => Self::Neutral,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoodHistogram {
    pub excellent: usize,
    pub good: usize,
    pub neutral: usize,
    pub low: usize,
    pub poor: usize,
}

impl MoodHistogram {
    fn record(&mut self, bucket: MoodBucket) {
        let slot = match bucket {
            MoodBucket::Excellent => &mut self.excellent,
            MoodBucket::Good => &mut self.good,
            MoodBucket::Neutral => &mut self.neutral,
            MoodBucket::Low => &mut self.low,
            MoodBucket::Poor => &mut self.poor,
        };
        *slot += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalytics {
    pub average_mood: f64,
    pub trend: MoodHistogram,
    pub total_entries: usize,
    pub week_checkins: usize,
    pub today_checkins: usize,
    pub today_mood: Option<MoodRecord>,
}

/// Mood section of the summary; same counts, no `today_mood`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSummary {
    pub average_mood: f64,
    pub trend: MoodHistogram,
    pub total_entries: usize,
    pub week_checkins: usize,
    pub today_checkins: usize,
}

impl From<MoodAnalytics> for MoodSummary {
    fn from(mood: MoodAnalytics) -> Self {
        Self {
            average_mood: mood.average_mood,
            trend: mood.trend,
            total_entries: mood.total_entries,
            week_checkins: mood.week_checkins,
            today_checkins: mood.today_checkins,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalAnalytics {
    pub total_entries: usize,
    pub week_entries: usize,
    pub today_entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub total_mood_entries: usize,
    pub total_journal_entries: usize,
    pub week_activity: usize,
    pub today_activity: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    pub mood: MoodAnalytics,
    pub journal: JournalAnalytics,
    pub summary: ActivitySummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStats {
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub analytics: Analytics,
    pub entries: Vec<FeedItem>,
    pub stats: ReportStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryOverview {
    #[serde(flatten)]
    pub activity: ActivitySummary,
    pub generated_at: DateTime<Utc>,
}

/// The report without the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub mood: MoodSummary,
    pub journal: JournalAnalytics,
    pub overview: SummaryOverview,
}

/// Reporting windows anchored on the caller's `now`.
#[derive(Debug, Clone, Copy)]
struct Window {
    week_start: DateTime<Utc>,
    today: NaiveDate,
}

impl Window {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            week_start: now - Duration::days(WEEK_DAYS),
            today: now.date_naive(),
        }
    }

    fn in_week(&self, created_at: Option<DateTime<Utc>>) -> bool {
        created_at.is_some_and(|t| t >= self.week_start)
    }

    fn is_today(&self, created_at: Option<DateTime<Utc>>) -> bool {
        created_at.is_some_and(|t| t.date_naive() == self.today)
    }
}

pub fn aggregate(
    user_id: Uuid,
    moods: &[MoodRecord],
    journals: &[JournalRecord],
    now: DateTime<Utc>,
) -> AnalyticsReport {
    tracing::debug!(
        user_id = %user_id,
        moods = moods.len(),
        journals = journals.len(),
        "Aggregating progress analytics"
    );

    let window = Window::new(now);
    let mood = mood_analytics(moods, &window);
    let journal = journal_analytics(journals, &window);
    let summary = activity_summary(&mood, &journal);

    AnalyticsReport {
        analytics: Analytics {
            mood,
            journal,
            summary,
        },
        entries: unified_feed(moods, journals),
        stats: ReportStats { generated_at: now },
    }
}

pub fn summarize(
    moods: &[MoodRecord],
    journals: &[JournalRecord],
    now: DateTime<Utc>,
) -> ProgressSummary {
    let window = Window::new(now);
    let mood = mood_analytics(moods, &window);
    let journal = journal_analytics(journals, &window);
    let activity = activity_summary(&mood, &journal);

    ProgressSummary {
        mood: mood.into(),
        journal,
        overview: SummaryOverview {
            activity,
            generated_at: now,
        },
    }
}

fn mood_analytics(moods: &[MoodRecord], window: &Window) -> MoodAnalytics {
    let average_mood = if moods.is_empty() {
        0.0
    } else {
        let total: i64 = moods.iter().map(|m| i64::from(m.mood_level.get())).sum();
        round2(total as f64 / moods.len() as f64)
    };

    let mut trend = MoodHistogram::default();
    for m in moods {
        trend.record(MoodBucket::from_level(m.mood_level.get()));
    }

    MoodAnalytics {
        average_mood,
        trend,
        total_entries: moods.len(),
        week_checkins: moods.iter().filter(|m| window.in_week(m.created_at)).count(),
        today_checkins: moods.iter().filter(|m| window.is_today(m.created_at)).count(),
        // first match in input order, not the most recent
        today_mood: moods.iter().find(|m| window.is_today(m.created_at)).cloned(),
    }
}

fn journal_analytics(journals: &[JournalRecord], window: &Window) -> JournalAnalytics {
    JournalAnalytics {
        total_entries: journals.len(),
        week_entries: journals.iter().filter(|j| window.in_week(j.created_at)).count(),
        today_entries: journals.iter().filter(|j| window.is_today(j.created_at)).count(),
    }
}

fn activity_summary(mood: &MoodAnalytics, journal: &JournalAnalytics) -> ActivitySummary {
    ActivitySummary {
        total_mood_entries: mood.total_entries,
        total_journal_entries: journal.total_entries,
        week_activity: mood.week_checkins + journal.week_entries,
        today_activity: mood.today_checkins + journal.today_entries,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
