use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::RecordError;

/// Check-in mood score, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn get(self) -> i32 {
        i32::from(self.0)
    }
}

impl TryFrom<i32> for MoodLevel {
    type Error = RecordError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RecordError::MoodLevelOutOfRange(value))
        }
    }
}

impl From<MoodLevel> for i32 {
    fn from(level: MoodLevel) -> Self {
        level.get()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood_level: MoodLevel,
    pub emoji: Option<String>,
    pub note: Option<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A `mood_entries` row as stored. Legacy rows may carry nulls in columns the
/// typed record requires; those are rejected on conversion.
#[derive(Debug, Clone, FromRow)]
pub struct MoodRow {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub mood_level: Option<i32>,
    pub emoji: Option<String>,
    pub note: Option<String>,
    pub triggers: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<MoodRow> for MoodRecord {
    type Error = RecordError;

    fn try_from(row: MoodRow) -> Result<Self, Self::Error> {
        let missing = |field| RecordError::MissingField {
            kind: "mood",
            id: row.id,
            field,
        };

        let user_id = row.user_id.ok_or_else(|| missing("user_id"))?;
        let raw_level = row.mood_level.ok_or_else(|| missing("mood_level"))?;
        let mood_level = MoodLevel::try_from(raw_level).map_err(|e| RecordError::InvalidMood {
            id: row.id,
            source: Box::new(e),
        })?;

        Ok(Self {
            id: row.id,
            user_id,
            mood_level,
            emoji: row.emoji,
            note: row.note,
            triggers: row.triggers.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl MoodRecord {
    /// Converts every row or none: the first malformed row aborts.
    pub fn from_rows(rows: Vec<MoodRow>) -> Result<Vec<Self>, RecordError> {
        rows.into_iter().map(Self::try_from).collect()
    }
}
