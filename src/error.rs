use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

/// A stored record that cannot be turned into a typed record.
///
/// Raised while converting storage rows, before any aggregation starts, so a
/// single bad row fails the whole report instead of being skipped.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    #[error("{kind} record {id} is missing required field `{field}`")]
    MissingField {
        kind: &'static str,
        id: Uuid,
        field: &'static str,
    },

    #[error("mood level {0} is outside 1..=5")]
    MoodLevelOutOfRange(i32),

    #[error("mood record {id}: {source}")]
    InvalidMood {
        id: Uuid,
        #[source]
        source: Box<RecordError>,
    },

    #[error("journal record {id} has unknown sentiment label `{value}`")]
    UnknownSentiment { id: Uuid, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed record: {0}")]
    Record(#[from] RecordError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Record(e) => {
                tracing::error!(error = %e, "Malformed record in store");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
