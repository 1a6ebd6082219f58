use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::analytics::sentiment::SentimentLabel;
use crate::error::RecordError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub is_private: bool,
    pub sentiment: Option<SentimentLabel>,
    #[serde(default)]
    pub ai_insights: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct JournalRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_private: Option<bool>,
    pub sentiment: Option<String>,
    pub ai_insights: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<JournalRow> for JournalRecord {
    type Error = RecordError;

    fn try_from(row: JournalRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let missing = |field| RecordError::MissingField {
            kind: "journal",
            id,
            field,
        };

        let user_id = row.user_id.ok_or_else(|| missing("user_id"))?;
        let title = row.title.ok_or_else(|| missing("title"))?;
        let content = row.content.ok_or_else(|| missing("content"))?;
        let sentiment = row
            .sentiment
            .map(|value| {
                value
                    .parse::<SentimentLabel>()
                    .map_err(|_| RecordError::UnknownSentiment { id, value })
            })
            .transpose()?;

        Ok(Self {
            id,
            user_id,
            title,
            content,
            is_private: row.is_private.unwrap_or(false),
            sentiment,
            ai_insights: row.ai_insights,
            tags: row.tags.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl JournalRecord {
    /// Converts every row or none: the first malformed row aborts.
    pub fn from_rows(rows: Vec<JournalRow>) -> Result<Vec<Self>, RecordError> {
        rows.into_iter().map(Self::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> JournalRow {
        JournalRow {
            id: Uuid::new_v4(),
            user_id: Some(Uuid::new_v4()),
            title: Some("Monday".into()),
            content: Some("Long walk by the river".into()),
            is_private: None,
            sentiment: Some("positive".into()),
            ai_insights: None,
            tags: Some(vec!["outdoors".into()]),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_row_converts() {
        let record = JournalRecord::try_from(row()).unwrap();
        assert_eq!(record.sentiment, Some(SentimentLabel::Positive));
        assert!(!record.is_private);
        assert_eq!(record.tags, vec!["outdoors".to_string()]);
    }

    #[test]
    fn test_missing_content_is_rejected() {
        let mut r = row();
        r.content = None;
        let id = r.id;
        assert_eq!(
            JournalRecord::try_from(r),
            Err(RecordError::MissingField {
                kind: "journal",
                id,
                field: "content",
            })
        );
    }

    #[test]
    fn test_unknown_sentiment_is_rejected() {
        let mut r = row();
        r.sentiment = Some("ecstatic".into());
        assert!(matches!(
            JournalRecord::try_from(r),
            Err(RecordError::UnknownSentiment { .. })
        ));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = JournalRecord::try_from(row()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["isPrivate"], false);
        assert_eq!(json["sentiment"], "positive");
        assert!(json.get("userId").is_some());
        assert!(json["aiInsights"].is_null());
    }

    #[test]
    fn test_from_rows_fails_whole_batch_on_one_bad_row() {
        let good = row();
        let mut bad = row();
        bad.user_id = None;
        let bad_id = bad.id;

        assert_eq!(
            JournalRecord::from_rows(vec![good.clone(), bad, row()]),
            Err(RecordError::MissingField {
                kind: "journal",
                id: bad_id,
                field: "user_id",
            })
        );

        let records = JournalRecord::from_rows(vec![good, row()]).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_ai_insights_carried_through() {
        let mut r = row();
        r.ai_insights = Some("Walks seem to lift your mood.".into());
        let record = JournalRecord::try_from(r).unwrap();
        assert_eq!(
            record.ai_insights.as_deref(),
            Some("Walks seem to lift your mood.")
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["aiInsights"], "Walks seem to lift your mood.");
    }
}
