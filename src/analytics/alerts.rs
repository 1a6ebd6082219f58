use uuid::Uuid;

use super::sentiment::SentimentLabel;

/// Raised whenever classified text matches a crisis phrase.
#[derive(Debug, Clone, Copy)]
pub struct CrisisAlert<'a> {
    pub user_id: Option<Uuid>,
    pub label: SentimentLabel,
    pub terms: &'a [String],
}

/// Downstream escalation hook. The engine only raises; acting on an alert
/// (paging, outreach) belongs to the implementor.
pub trait CrisisAlertSink: Send + Sync {
    fn raise(&self, alert: &CrisisAlert<'_>);
}

/// Default sink: a structured warning carrying the user the text belongs to.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlertSink;

impl CrisisAlertSink for TracingAlertSink {
    fn raise(&self, alert: &CrisisAlert<'_>) {
        tracing::warn!(
            target: "crisis",
            user_id = ?alert.user_id,
            terms = ?alert.terms,
            label = %alert.label,
            "Crisis alert raised for escalation"
        );
    }
}
