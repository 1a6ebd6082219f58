//! Request/response bodies of the sentiment endpoints. Progress endpoints
//! serialize the analytics reports directly.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::analytics::TrendReport;

/// POST /api/sentiment/analyze
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1, max = 20000, message = "Text must be 1-20000 characters"))]
    pub text: String,
}

/// GET /api/sentiment/trend
#[derive(Debug, Serialize)]
pub struct SentimentTrendResponse {
    #[serde(flatten)]
    pub report: TrendReport,
    /// Journal entries whose text matched a crisis phrase.
    pub crisis_entries: usize,
}
