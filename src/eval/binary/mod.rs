//! Binary classification metrics
//!
//! Provides the 2×2 confusion tally and the derived metrics:
//! precision, recall, F1, accuracy. Zero denominators surface as
//! [`crate::Error::UndefinedMetric`] rather than NaN.

mod confusion;
mod metrics;
mod report;

#[cfg(test)]
mod tests;

pub use confusion::BinaryConfusion;
pub use metrics::BinaryMetrics;
pub use report::{binary_classification_metrics, binary_classification_metrics_to};
