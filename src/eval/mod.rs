//! Model evaluation metrics
//!
//! - `binary`: binary confusion tally, precision/recall/F1/accuracy
//! - `multiclass`: multiclass accuracy, confusion matrix, reports
//! - `regression`: MSE, MAE, RMSE, R²

pub mod binary;
pub mod multiclass;
pub mod regression;

pub use binary::{
    binary_classification_metrics, binary_classification_metrics_to, BinaryConfusion,
    BinaryMetrics,
};
pub use multiclass::{
    classification_report, multiclass_accuracy, Average, ClassMetrics, ConfusionMatrix,
    MultiClassMetrics,
};
pub use regression::{mae, mse, r_squared, rmse};
