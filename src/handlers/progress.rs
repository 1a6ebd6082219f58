use axum::{extract::State, Extension, Json};
use chrono::Utc;

use crate::analytics::{aggregate, summarize, AnalyticsReport, ProgressSummary};
use crate::auth::middleware::AuthUser;
use crate::db::records::{fetch_journal_rows, fetch_mood_rows};
use crate::error::AppResult;
use crate::models::journal::JournalRecord;
use crate::models::mood::MoodRecord;
use crate::AppState;

async fn load_records(
    state: &AppState,
    auth_user: &AuthUser,
) -> AppResult<(Vec<MoodRecord>, Vec<JournalRecord>)> {
    let mood_rows = fetch_mood_rows(&state.db, auth_user.id).await?;
    let journal_rows = fetch_journal_rows(&state.db, auth_user.id).await?;

    Ok((
        MoodRecord::from_rows(mood_rows)?,
        JournalRecord::from_rows(journal_rows)?,
    ))
}

pub async fn get_progress(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<AnalyticsReport>> {
    let (moods, journals) = load_records(&state, &auth_user).await?;
    let report = aggregate(auth_user.id, &moods, &journals, Utc::now());
    Ok(Json(report))
}

pub async fn get_progress_summary(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<ProgressSummary>> {
    let (moods, journals) = load_records(&state, &auth_user).await?;
    Ok(Json(summarize(&moods, &journals, Utc::now())))
}
