//! Derived binary classification metrics

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::confusion::BinaryConfusion;

/// The four binary classification metrics, all in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryMetrics {
    /// tp / (tp + fp)
    pub precision: f64,
    /// tp / (tp + fn)
    pub recall: f64,
    /// 2·precision·recall / (precision + recall)
    pub f1: f64,
    /// (tp + tn) / total
    pub accuracy: f64,
}

impl BinaryMetrics {
    /// Derive all four metrics from a confusion tally
    ///
    /// # Errors
    /// [`crate::Error::UndefinedMetric`] if any denominator is zero.
    pub fn from_confusion(tally: &BinaryConfusion) -> Result<Self> {
        Ok(Self {
            precision: tally.precision()?,
            recall: tally.recall()?,
            f1: tally.f1()?,
            accuracy: tally.accuracy()?,
        })
    }

    /// The metrics as a tuple in the order (precision, recall, f1, accuracy)
    ///
    /// The order intentionally differs from the tally order used by
    /// [`BinaryConfusion::summary`]; it is part of the contract and callers
    /// destructure against it.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.precision, self.recall, self.f1, self.accuracy)
    }
}
