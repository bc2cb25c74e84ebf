//! Per-class precision, recall, and F1

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::average::Average;
use super::confusion::ConfusionMatrix;

/// Metrics for one class, one-vs-rest
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// tp / (tp + fp); 0.0 when the class was never predicted
    pub precision: f64,
    /// tp / (tp + fn); 0.0 when the class has no true instances
    pub recall: f64,
    /// Harmonic mean of precision and recall; 0.0 when both are zero
    pub f1: f64,
    /// Number of true instances of the class
    pub support: usize,
}

/// Per-class metrics for every class in a confusion matrix
///
/// Unlike the binary tally, absent classes are expected in multiclass
/// reports, so zero denominators collapse to 0.0 per class instead of
/// erroring; the caller sees them as zero rows with zero support.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultiClassMetrics {
    /// One entry per class, indexed by label
    pub classes: Vec<ClassMetrics>,
}

impl MultiClassMetrics {
    /// Compute per-class metrics from a confusion matrix
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let classes = (0..cm.n_classes())
            .map(|class| {
                let tp = cm.true_positives(class) as f64;
                let fp = cm.false_positives(class) as f64;
                let fn_ = cm.false_negatives(class) as f64;

                let precision = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
                let recall = if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 };
                let f1 = if precision + recall > 0.0 {
                    2.0 * precision * recall / (precision + recall)
                } else {
                    0.0
                };

                ClassMetrics { precision, recall, f1, support: cm.support(class) }
            })
            .collect();

        Self { classes }
    }

    /// Compute from paired truths and predictions
    ///
    /// # Errors
    /// [`crate::Error::InvalidInput`] when the slices are empty or have
    /// different lengths.
    pub fn from_labels(y_true: &[usize], y_pred: &[usize]) -> Result<Self> {
        let cm = ConfusionMatrix::from_labels(y_true, y_pred)?;
        Ok(Self::from_confusion_matrix(&cm))
    }

    /// Averaged precision
    pub fn precision_avg(&self, average: Average) -> f64 {
        self.average(average, |c| c.precision)
    }

    /// Averaged recall
    pub fn recall_avg(&self, average: Average) -> f64 {
        self.average(average, |c| c.recall)
    }

    /// Averaged F1
    pub fn f1_avg(&self, average: Average) -> f64 {
        self.average(average, |c| c.f1)
    }

    fn average(&self, average: Average, value: impl Fn(&ClassMetrics) -> f64) -> f64 {
        if self.classes.is_empty() {
            return 0.0;
        }
        match average {
            Average::Macro => {
                self.classes.iter().map(&value).sum::<f64>() / self.classes.len() as f64
            }
            Average::Weighted => {
                let total: usize = self.classes.iter().map(|c| c.support).sum();
                if total == 0 {
                    return 0.0;
                }
                self.classes.iter().map(|c| value(c) * c.support as f64).sum::<f64>()
                    / total as f64
            }
        }
    }
}
