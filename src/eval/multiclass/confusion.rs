//! Confusion matrix over integer class labels

use std::fmt;

use crate::error::{Error, Result};

/// Confusion matrix for multiclass classification
///
/// `counts[t][p]` is the number of samples with true label `t` predicted as
/// `p`. Classes are the integers `0..n_classes`, where `n_classes` is one
/// past the largest label observed on either side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfusionMatrix {
    counts: Vec<Vec<usize>>,
    n_classes: usize,
}

impl ConfusionMatrix {
    /// Build the matrix from paired truths and predictions
    ///
    /// # Errors
    /// [`Error::InvalidInput`] when the slices are empty or have different
    /// lengths.
    pub fn from_labels(y_true: &[usize], y_pred: &[usize]) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(Error::length_mismatch(y_pred.len(), y_true.len()));
        }
        if y_true.is_empty() {
            return Err(Error::empty_input("confusion matrix"));
        }

        let n_classes = y_true.iter().chain(y_pred.iter()).max().map_or(0, |&m| m + 1);
        let mut counts = vec![vec![0; n_classes]; n_classes];
        for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
            counts[truth][pred] += 1;
        }

        Ok(Self { counts, n_classes })
    }

    /// Number of classes covered by the matrix
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Count of samples with true label `truth` predicted as `pred`
    pub fn get(&self, truth: usize, pred: usize) -> usize {
        self.counts[truth][pred]
    }

    /// Samples of `class` predicted as `class`
    pub fn true_positives(&self, class: usize) -> usize {
        self.counts[class][class]
    }

    /// Samples of another class predicted as `class`
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes).filter(|&t| t != class).map(|t| self.counts[t][class]).sum()
    }

    /// Samples of `class` predicted as something else
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes).filter(|&p| p != class).map(|p| self.counts[class][p]).sum()
    }

    /// Number of true instances of `class`
    pub fn support(&self, class: usize) -> usize {
        self.counts[class].iter().sum()
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Fraction of samples on the diagonal
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.n_classes).map(|c| self.counts[c][c]).sum();
        correct as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        write!(f, "        ")?;
        for p in 0..self.n_classes {
            write!(f, "{:>7}", format!("Pred {p}"))?;
        }
        writeln!(f)?;

        for t in 0..self.n_classes {
            write!(f, "True {t:<3}")?;
            for p in 0..self.n_classes {
                write!(f, "{:>7}", self.counts[t][p])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
