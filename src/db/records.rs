//! Read side of the record store. Rows come back untyped-ish and are
//! validated by the caller via `MoodRecord::from_rows` / `JournalRecord::from_rows`.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::journal::JournalRow;
use crate::models::mood::MoodRow;

pub async fn fetch_mood_rows(db: &PgPool, user_id: Uuid) -> Result<Vec<MoodRow>, sqlx::Error> {
    sqlx::query_as::<_, MoodRow>(
        r#"
        SELECT id, user_id, mood_level, emoji, note, triggers, created_at, updated_at
        FROM mood_entries
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn fetch_journal_rows(
    db: &PgPool,
    user_id: Uuid,
) -> Result<Vec<JournalRow>, sqlx::Error> {
    sqlx::query_as::<_, JournalRow>(
        r#"
        SELECT id, user_id, title, content, is_private, sentiment, ai_insights, tags,
               created_at, updated_at
        FROM journal_entries
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}
