use axum::{extract::State, Extension, Json};
use validator::Validate;

use crate::analytics::{classify, classify_with_alerts, estimate, Classification};
use crate::auth::middleware::AuthUser;
use crate::db::records::fetch_journal_rows;
use crate::dto::{AnalyzeRequest, SentimentTrendResponse};
use crate::error::{AppError, AppResult};
use crate::models::journal::JournalRecord;
use crate::AppState;

pub async fn analyze_text(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<AnalyzeRequest>,
) -> AppResult<Json<Classification>> {
    body.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    let classification =
        classify_with_alerts(&body.text, Some(auth_user.id), state.alerts.as_ref());
    Ok(Json(classification))
}

/// Recomputes the trend from the user's journal text, oldest entry first.
/// Past entries are logged on crisis matches but not re-escalated to the sink.
pub async fn get_sentiment_trend(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<SentimentTrendResponse>> {
    let rows = fetch_journal_rows(&state.db, auth_user.id).await?;
    let mut journals = JournalRecord::from_rows(rows)?;
    journals.sort_by_key(|j| j.created_at);

    let history: Vec<Classification> = journals.iter().map(|j| classify(&j.content)).collect();
    let crisis_entries = history.iter().filter(|c| c.crisis_flag).count();

    let report = estimate(&history);
    tracing::info!(
        user_id = %auth_user.id,
        entries = report.total_entries,
        risk_level = ?report.risk_level,
        "Sentiment trend computed"
    );

    Ok(Json(SentimentTrendResponse {
        report,
        crisis_entries,
    }))
}
