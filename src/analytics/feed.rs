use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::journal::JournalRecord;
use crate::models::mood::{MoodLevel, MoodRecord};

/// One entry of the merged mood + journal timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeedItem {
    Mood(MoodFeedItem),
    Journal(JournalFeedItem),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodFeedItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood_level: MoodLevel,
    pub emoji: Option<String>,
    pub note: Option<String>,
    pub triggers: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub full_entry: MoodRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalFeedItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub is_private: bool,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub full_entry: JournalRecord,
}

impl FeedItem {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Mood(item) => item.id,
            Self::Journal(item) => item.id,
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Mood(item) => item.created_at,
            Self::Journal(item) => item.created_at,
        }
    }
}

impl From<&MoodRecord> for FeedItem {
    fn from(record: &MoodRecord) -> Self {
        Self::Mood(MoodFeedItem {
            id: record.id,
            user_id: record.user_id,
            mood_level: record.mood_level,
            emoji: record.emoji.clone(),
            note: record.note.clone(),
            triggers: record.triggers.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
            full_entry: record.clone(),
        })
    }
}

impl From<&JournalRecord> for FeedItem {
    fn from(record: &JournalRecord) -> Self {
        Self::Journal(JournalFeedItem {
            id: record.id,
            user_id: record.user_id,
            title: record.title.clone(),
            content: record.content.clone(),
            is_private: record.is_private,
            tags: record.tags.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
            full_entry: record.clone(),
        })
    }
}

/// Merges both record kinds newest first. Records without a creation time
/// sort last; order among equal timestamps is unspecified.
pub fn unified_feed(moods: &[MoodRecord], journals: &[JournalRecord]) -> Vec<FeedItem> {
    let mut items: Vec<FeedItem> = moods
        .iter()
        .map(FeedItem::from)
        .chain(journals.iter().map(FeedItem::from))
        .collect();

    // `None` orders below every `Some`, so descending puts it at the end.
    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2026, 2, 10, hour, 0, 0).unwrap())
    }

    fn mood(created_at: Option<DateTime<Utc>>) -> MoodRecord {
        MoodRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            mood_level: MoodLevel::try_from(3).unwrap(),
            emoji: None,
            note: None,
            triggers: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    fn journal(created_at: Option<DateTime<Utc>>) -> JournalRecord {
        JournalRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            title: "entry".into(),
            content: "wrote a little".into(),
            is_private: true,
            sentiment: None,
            ai_insights: None,
            tags: Vec::new(),
            created_at,
            updated_at: None,
        }
    }

    #[test]
    fn test_feed_sorted_newest_first_with_missing_last() {
        let moods = vec![mood(at(8)), mood(None), mood(at(20))];
        let journals = vec![journal(None), journal(at(12)), journal(at(1))];
        let feed = unified_feed(&moods, &journals);

        assert_eq!(feed.len(), 6);
        for pair in feed.windows(2) {
            assert!(pair[0].created_at() >= pair[1].created_at());
        }
        assert_eq!(feed[0].id(), moods[2].id);
        assert!(feed[4].created_at().is_none());
        assert!(feed[5].created_at().is_none());
    }

    #[test]
    fn test_feed_orders_across_days() {
        let yesterday = at(23).map(|t| t - Duration::days(1));
        let moods = vec![mood(yesterday)];
        let journals = vec![journal(at(0))];
        let feed = unified_feed(&moods, &journals);
        assert_eq!(feed[0].id(), journals[0].id);
    }

    #[test]
    fn test_mood_item_shape() {
        let record = mood(at(9));
        let json = serde_json::to_value(FeedItem::from(&record)).unwrap();
        assert_eq!(json["type"], "mood");
        assert_eq!(json["moodLevel"], 3);
        assert_eq!(json["userId"], Uuid::nil().to_string());
        assert_eq!(json["fullEntry"]["id"], record.id.to_string());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_journal_item_shape() {
        let record = journal(None);
        let json = serde_json::to_value(FeedItem::from(&record)).unwrap();
        assert_eq!(json["type"], "journal");
        assert_eq!(json["isPrivate"], true);
        assert!(json["createdAt"].is_null());
        assert_eq!(json["fullEntry"]["title"], "entry");
    }
}
