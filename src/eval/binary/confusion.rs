//! Binary confusion tally

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::metrics::BinaryMetrics;

/// 2×2 confusion tally for binary classification
///
/// Built in a single pass over paired predictions and truths with values in
/// {0, 1}. The four counts always sum to the number of samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryConfusion {
    /// Predicted 1, truth 1
    pub tp: usize,
    /// Predicted 0, truth 0
    pub tn: usize,
    /// Predicted 1, truth 0
    pub fp: usize,
    /// Predicted 0, truth 1
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl BinaryConfusion {
    /// Build the tally from paired labels
    ///
    /// Each index pairs one sample's prediction with its ground truth. A
    /// pair lands in exactly one of the four cells: tp when both are 1,
    /// tn when both are 0, fn when the truth is 1 but the prediction is
    /// not, fp otherwise.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] when the slices are empty, have different
    /// lengths, or contain a value outside {0, 1}.
    pub fn from_labels(y_pred: &[usize], y_true: &[usize]) -> Result<Self> {
        if y_pred.len() != y_true.len() {
            return Err(Error::length_mismatch(y_pred.len(), y_true.len()));
        }
        if y_pred.is_empty() {
            return Err(Error::empty_input("binary classification"));
        }

        let mut tally = Self::default();
        for (&pred, &truth) in y_pred.iter().zip(y_true.iter()) {
            match (pred, truth) {
                (1, 1) => tally.tp += 1,
                (0, 0) => tally.tn += 1,
                (0, 1) => tally.fn_ += 1,
                (1, 0) => tally.fp += 1,
                _ => {
                    return Err(Error::InvalidInput(format!(
                        "binary labels must be 0 or 1, got prediction {pred} with truth {truth}"
                    )))
                }
            }
        }
        Ok(tally)
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    /// Fraction of correct predictions: (tp + tn) / total
    ///
    /// # Errors
    /// [`Error::UndefinedMetric`] when the tally is empty.
    pub fn accuracy(&self) -> Result<f64> {
        let total = self.total();
        if total == 0 {
            return Err(Error::undefined("accuracy", "tally holds no samples"));
        }
        Ok((self.tp + self.tn) as f64 / total as f64)
    }

    /// Fraction of positive predictions that are correct: tp / (tp + fp)
    ///
    /// # Errors
    /// [`Error::UndefinedMetric`] when nothing was predicted positive.
    pub fn precision(&self) -> Result<f64> {
        let denom = self.tp + self.fp;
        if denom == 0 {
            return Err(Error::undefined("precision", "no positive predictions (tp + fp = 0)"));
        }
        Ok(self.tp as f64 / denom as f64)
    }

    /// Fraction of actual positives correctly predicted: tp / (tp + fn)
    ///
    /// # Errors
    /// [`Error::UndefinedMetric`] when the truth holds no positives.
    pub fn recall(&self) -> Result<f64> {
        let denom = self.tp + self.fn_;
        if denom == 0 {
            return Err(Error::undefined("recall", "no positive truths (tp + fn = 0)"));
        }
        Ok(self.tp as f64 / denom as f64)
    }

    /// Harmonic mean of precision and recall
    ///
    /// # Errors
    /// [`Error::UndefinedMetric`] when precision or recall is undefined,
    /// or when both are zero.
    pub fn f1(&self) -> Result<f64> {
        let p = self.precision()?;
        let r = self.recall()?;
        if p + r == 0.0 {
            return Err(Error::undefined("f1", "precision + recall = 0"));
        }
        Ok(2.0 * p * r / (p + r))
    }

    /// Compute all four metrics at once
    ///
    /// # Errors
    /// [`Error::UndefinedMetric`] if any denominator is zero.
    pub fn metrics(&self) -> Result<BinaryMetrics> {
        BinaryMetrics::from_confusion(self)
    }

    /// Human-readable summary of the tally and its metrics
    ///
    /// Counts come first in tally order (TP, TN, FP, FN), then accuracy,
    /// precision, recall, and F1. Metrics whose denominator is zero are
    /// reported as undefined instead of failing the whole summary.
    pub fn summary(&self) -> String {
        fn line(label: &str, value: Result<f64>) -> String {
            match value {
                Ok(v) => format!("{label}: {v:.4}\n"),
                Err(Error::UndefinedMetric { reason, .. }) => {
                    format!("{label}: undefined ({reason})\n")
                }
                Err(e) => format!("{label}: unavailable ({e})\n"),
            }
        }

        let mut out = String::new();
        out.push_str(&format!("TP: {}\n", self.tp));
        out.push_str(&format!("TN: {}\n", self.tn));
        out.push_str(&format!("FP: {}\n", self.fp));
        out.push_str(&format!("FN: {}\n", self.fn_));
        out.push_str(&line("Accuracy", self.accuracy()));
        out.push_str(&line("Precision", self.precision()));
        out.push_str(&line("Recall", self.recall()));
        out.push_str(&line("F1", self.f1()));
        out
    }
}

impl fmt::Display for BinaryConfusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
