//! Multiclass accuracy

use crate::error::{Error, Result};

/// Fraction of positions where prediction equals truth
///
/// Works for any label type comparable by equality; classes need no
/// particular encoding. Truths come first, matching how callers read
/// "accuracy of predictions against truths".
///
/// # Errors
/// [`Error::InvalidInput`] when the slices are empty or have different
/// lengths.
///
/// # Example
/// ```
/// use evaluar::eval::multiclass_accuracy;
///
/// let acc = multiclass_accuracy(&[1, 2, 3, 3], &[1, 2, 2, 3]).unwrap();
/// assert!((acc - 0.75).abs() < 1e-12);
///
/// // Labels are not restricted to integers
/// let acc = multiclass_accuracy(&["cat", "dog"], &["cat", "cat"]).unwrap();
/// assert!((acc - 0.5).abs() < 1e-12);
/// ```
pub fn multiclass_accuracy<T: PartialEq>(y_true: &[T], y_pred: &[T]) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(Error::length_mismatch(y_pred.len(), y_true.len()));
    }
    if y_true.is_empty() {
        return Err(Error::empty_input("multiclass accuracy"));
    }

    let correct = y_true.iter().zip(y_pred.iter()).filter(|(t, p)| t == p).count();
    Ok(correct as f64 / y_true.len() as f64)
}
