//! Regression metrics: MSE, MAE, RMSE, R²

use crate::error::{Error, Result};

fn check_pair(y_pred: &[f64], y_true: &[f64], what: &str) -> Result<()> {
    if y_pred.len() != y_true.len() {
        return Err(Error::length_mismatch(y_pred.len(), y_true.len()));
    }
    if y_pred.is_empty() {
        return Err(Error::empty_input(what));
    }
    Ok(())
}

/// Mean squared error: mean((truth − prediction)²)
///
/// # Errors
/// [`Error::InvalidInput`] when the slices are empty or have different
/// lengths.
///
/// # Example
/// ```
/// use evaluar::eval::mse;
///
/// let v = mse(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]).unwrap();
/// assert!((v - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn mse(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    check_pair(y_pred, y_true, "mse")?;
    let sum: f64 = y_pred.iter().zip(y_true.iter()).map(|(&p, &t)| (t - p).powi(2)).sum();
    Ok(sum / y_pred.len() as f64)
}

/// Mean absolute error: mean(|truth − prediction|)
///
/// # Errors
/// [`Error::InvalidInput`] when the slices are empty or have different
/// lengths.
pub fn mae(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    check_pair(y_pred, y_true, "mae")?;
    let sum: f64 = y_pred.iter().zip(y_true.iter()).map(|(&p, &t)| (t - p).abs()).sum();
    Ok(sum / y_pred.len() as f64)
}

/// Root mean squared error: sqrt(mse)
///
/// # Errors
/// [`Error::InvalidInput`] when the slices are empty or have different
/// lengths.
pub fn rmse(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    Ok(mse(y_pred, y_true)?.sqrt())
}

/// R² (coefficient of determination)
///
/// R² = 1 − SS_res / SS_tot, where SS_res = Σ(truth − prediction)² and
/// SS_tot = Σ(truth − mean(truth))². 1.0 is a perfect fit, 0.0 is
/// predicting the mean.
///
/// When every truth value is equal, SS_tot is zero and the ratio does not
/// exist. A prediction that nevertheless matches exactly (SS_res also zero)
/// scores 1.0; anything else is an error.
///
/// # Errors
/// [`Error::InvalidInput`] when the slices are empty or have different
/// lengths; [`Error::UndefinedMetric`] when all truths are equal and the
/// fit is not exact.
///
/// # Example
/// ```
/// use evaluar::eval::r_squared;
///
/// let r2 = r_squared(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]).unwrap();
/// assert!((r2 - 11.0 / 14.0).abs() < 1e-12);
/// ```
pub fn r_squared(y_pred: &[f64], y_true: &[f64]) -> Result<f64> {
    check_pair(y_pred, y_true, "r²")?;

    let mean_y: f64 = y_true.iter().sum::<f64>() / y_true.len() as f64;
    let ss_res: f64 = y_pred.iter().zip(y_true.iter()).map(|(&p, &t)| (t - p).powi(2)).sum();
    let ss_tot: f64 = y_true.iter().map(|&t| (t - mean_y).powi(2)).sum();

    if ss_tot == 0.0 {
        if ss_res == 0.0 {
            return Ok(1.0);
        }
        return Err(Error::undefined("r²", "all truth values are equal (ss_tot = 0)"));
    }

    Ok(1.0 - ss_res / ss_tot)
}
