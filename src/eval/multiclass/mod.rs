//! Multiclass classification metrics
//!
//! Provides multiclass accuracy over any equality-comparable labels, plus a
//! confusion matrix over integer class labels with per-class
//! precision/recall/F1, macro and weighted averaging, and sklearn-style
//! classification reports.

mod accuracy;
mod average;
mod confusion;
mod metrics;
mod report;


pub use accuracy::multiclass_accuracy;
pub use average::Average;
pub use confusion::ConfusionMatrix;
pub use metrics::{ClassMetrics, MultiClassMetrics};
pub use report::classification_report;
