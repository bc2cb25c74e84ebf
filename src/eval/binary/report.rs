//! Binary classification report functions

use std::io;

use crate::error::Result;

use super::confusion::BinaryConfusion;

/// Compute precision, recall, F1, and accuracy for binary labels, writing
/// the tally summary to `sink` before returning
///
/// # Arguments
/// * `sink` - Where the summary text goes
/// * `y_pred` - Predicted labels in {0, 1}
/// * `y_true` - Ground truth labels in {0, 1}
///
/// # Returns
/// The tuple in the order **(precision, recall, f1, accuracy)**. The order
/// deliberately does not match the printed tally order and is kept as-is;
/// destructure accordingly.
///
/// # Errors
/// [`crate::Error::InvalidInput`] for empty, mismatched, or non-binary
/// input; [`crate::Error::UndefinedMetric`] when a denominator is zero
/// (the summary is still written first, with the undefined metrics marked);
/// [`crate::Error::Io`] if the sink fails.
///
/// # Example
/// ```
/// use evaluar::eval::binary_classification_metrics_to;
///
/// let mut out = Vec::new();
/// let (precision, recall, f1, accuracy) =
///     binary_classification_metrics_to(&mut out, &[1, 0, 1, 1], &[1, 0, 0, 1]).unwrap();
/// assert_eq!(precision, 1.0);
/// assert_eq!(accuracy, 0.75);
/// assert!(f1 > recall && recall > 0.66);
/// assert!(String::from_utf8(out).unwrap().contains("TP: 2"));
/// ```
pub fn binary_classification_metrics_to<W: io::Write>(
    sink: &mut W,
    y_pred: &[usize],
    y_true: &[usize],
) -> Result<(f64, f64, f64, f64)> {
    let tally = BinaryConfusion::from_labels(y_pred, y_true)?;
    sink.write_all(tally.summary().as_bytes())?;
    let metrics = tally.metrics()?;
    Ok(metrics.as_tuple())
}

/// [`binary_classification_metrics_to`] with the summary on stdout
///
/// # Errors
/// Same as [`binary_classification_metrics_to`].
pub fn binary_classification_metrics(
    y_pred: &[usize],
    y_true: &[usize],
) -> Result<(f64, f64, f64, f64)> {
    binary_classification_metrics_to(&mut io::stdout(), y_pred, y_true)
}
