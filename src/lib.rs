//! Evaluar: evaluation metrics and exploratory dataset profiling
//!
//! Two components:
//!
//! - [`eval`]: stateless metric functions and value types for classification
//!   and regression evaluation (confusion tallies, precision/recall/F1,
//!   accuracy, MSE/MAE/RMSE, R²).
//! - [`profile`]: an exploratory-data-analysis reporter over an in-memory
//!   tabular dataset, producing descriptive statistics and terminal-rendered
//!   figures (missing-value bars, correlation heatmap, per-column
//!   histogram+boxplot).
//!
//! All computation is synchronous and pure; the only side channel is report
//! text written to a caller-supplied sink.
//!
//! # Example
//!
//! ```
//! use evaluar::eval::{multiclass_accuracy, BinaryConfusion};
//!
//! let tally = BinaryConfusion::from_labels(&[1, 0, 1, 1], &[1, 0, 0, 1]).unwrap();
//! assert_eq!(tally.tp, 2);
//! assert_eq!((tally.metrics().unwrap().accuracy * 100.0) as u32, 75);
//!
//! let acc = multiclass_accuracy(&[1, 2, 3, 3], &[1, 2, 2, 3]).unwrap();
//! assert!((acc - 0.75).abs() < 1e-12);
//! ```

pub mod error;
pub mod eval;
pub mod profile;

pub use error::{Error, Result};
