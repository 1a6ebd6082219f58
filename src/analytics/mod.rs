//! Sentiment classification, trend estimation and progress aggregation.
//!
//! All functions here are synchronous and keep no state between calls; the
//! only side effect is the crisis signal raised by the classifier.

pub mod aggregate;
pub mod alerts;
pub mod feed;
pub mod sentiment;
pub mod trend;

pub use aggregate::{aggregate, summarize, AnalyticsReport, ProgressSummary};
pub use alerts::{CrisisAlert, CrisisAlertSink, TracingAlertSink};
pub use sentiment::{classify, classify_with_alerts, Classification, SentimentLabel};
pub use trend::{estimate, estimate_labels, RiskLevel, Trend, TrendReport};
