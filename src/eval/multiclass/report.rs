//! Classification report

use std::fmt::Write as _;

use crate::error::Result;

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::metrics::MultiClassMetrics;

/// Generate an sklearn-style classification report
///
/// One row per class with precision, recall, F1, and support, followed by
/// macro and weighted averages and the overall accuracy.
///
/// # Errors
/// [`crate::Error::InvalidInput`] when the slices are empty or have
/// different lengths.
///
/// # Example
/// ```
/// use evaluar::eval::classification_report;
///
/// let report = classification_report(&[0, 1, 0, 2, 1], &[0, 1, 1, 2, 0]).unwrap();
/// assert!(report.contains("macro avg"));
/// ```
pub fn classification_report(y_true: &[usize], y_pred: &[usize]) -> Result<String> {
    let cm = ConfusionMatrix::from_labels(y_true, y_pred)?;
    let metrics = MultiClassMetrics::from_confusion_matrix(&cm);

    let mut report = String::new();
    let _ = writeln!(
        report,
        "{:>12} {:>10} {:>10} {:>10} {:>10}",
        "", "precision", "recall", "f1-score", "support"
    );
    report.push_str(&"-".repeat(56));
    report.push('\n');

    for (class, m) in metrics.classes.iter().enumerate() {
        let _ = writeln!(
            report,
            "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
            format!("Class {class}"),
            m.precision,
            m.recall,
            m.f1,
            m.support
        );
    }

    report.push_str(&"-".repeat(56));
    report.push('\n');

    let total_support: usize = metrics.classes.iter().map(|c| c.support).sum();
    for (label, avg) in [("macro avg", Average::Macro), ("weighted avg", Average::Weighted)] {
        let _ = writeln!(
            report,
            "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10}",
            label,
            metrics.precision_avg(avg),
            metrics.recall_avg(avg),
            metrics.f1_avg(avg),
            total_support
        );
    }

    let _ = writeln!(report, "\nAccuracy: {:.4}", cm.accuracy());

    Ok(report)
}
