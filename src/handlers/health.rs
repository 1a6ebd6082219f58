use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "sereni-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Ready once the record store answers and both record tables exist.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let tables = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT to_regclass('public.mood_entries') IS NOT NULL
           AND to_regclass('public.journal_entries') IS NOT NULL
        "#,
    )
    .fetch_one(&state.db)
    .await;

    let (status, database, records) = match tables {
        Ok(true) => (StatusCode::OK, "ok", "ok"),
        Ok(false) => (StatusCode::SERVICE_UNAVAILABLE, "ok", "missing"),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check could not reach the database");
            (StatusCode::SERVICE_UNAVAILABLE, "failed", "unknown")
        }
    };

    let readiness = if status == StatusCode::OK {
        "ready"
    } else {
        "not_ready"
    };
    (
        status,
        Json(json!({
            "status": readiness,
            "checks": { "database": database, "record_tables": records },
        })),
    )
}
