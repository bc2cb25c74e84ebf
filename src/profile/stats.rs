//! Descriptive statistics for profiled columns

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::frame::Column;

/// Descriptive statistics for one numeric column
///
/// Quartiles use linear interpolation over the sorted values. `std` is the
/// sample standard deviation (n − 1), 0.0 for a single value. Outliers are
/// values beyond the 1.5×IQR fences.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Count of values outside the 1.5×IQR fences
    pub outliers: usize,
}

impl NumericSummary {
    /// Summarize a slice of (non-missing) values
    ///
    /// # Errors
    /// [`Error::UndefinedMetric`] when the slice is empty.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::undefined("numeric summary", "no non-missing values"));
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = if n > 1 {
            let variance =
                sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        let q1 = quantile(&sorted, 0.25);
        let median = quantile(&sorted, 0.5);
        let q3 = quantile(&sorted, 0.75);

        let iqr = q3 - q1;
        let low_fence = q1 - 1.5 * iqr;
        let high_fence = q3 + 1.5 * iqr;
        let outliers = sorted.iter().filter(|&&v| v < low_fence || v > high_fence).count();

        Ok(Self { mean, std, min: sorted[0], q1, median, q3, max: sorted[n - 1], outliers })
    }

    /// Summarize the numeric cells of a column
    ///
    /// # Errors
    /// [`Error::UndefinedMetric`] when the column has no numeric cells.
    pub fn from_column(column: &Column) -> Result<Self> {
        Self::from_values(&column.numbers())
    }

    /// Interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// The 1.5×IQR outlier fences as (low, high)
    pub fn fences(&self) -> (f64, f64) {
        let iqr = self.iqr();
        (self.q1 - 1.5 * iqr, self.q3 + 1.5 * iqr)
    }
}

/// Quantile by linear interpolation; `sorted` must be non-empty and sorted
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (pos - lo as f64) * (sorted[hi] - sorted[lo])
    }
}

/// One row of a frequency table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// Display label of the value; missing cells appear as `<missing>`
    pub value: String,
    pub count: usize,
    /// count / column length
    pub frequency: f64,
}

/// Value counts for one categorical column, descending by count
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoricalSummary {
    pub rows: Vec<FrequencyRow>,
}

impl CategoricalSummary {
    /// Tally the values of a column, missing cells included
    pub fn from_column(column: &Column) -> Self {
        let mut order: Vec<String> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for value in column.values() {
            let label = value.label();
            if !counts.contains_key(&label) {
                order.push(label.clone());
            }
            *counts.entry(label).or_insert(0) += 1;
        }

        let total = column.len().max(1);
        let mut rows: Vec<FrequencyRow> = order
            .into_iter()
            .map(|label| {
                let count = counts[&label];
                FrequencyRow {
                    value: label,
                    count,
                    frequency: count as f64 / total as f64,
                }
            })
            .collect();
        // Stable sort keeps first-seen order among equal counts
        rows.sort_by(|a, b| b.count.cmp(&a.count));

        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::frame::Value;

    #[test]
    fn test_summary_known_values() {
        // 1..=9: quartiles land on whole positions
        let values: Vec<f64> = (1..=9).map(f64::from).collect();
        let s = NumericSummary::from_values(&values).unwrap();
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.q1, 3.0);
        assert_eq!(s.median, 5.0);
        assert_eq!(s.q3, 7.0);
        assert_eq!(s.max, 9.0);
        assert_eq!(s.iqr(), 4.0);
        assert_eq!(s.outliers, 0);
        // Sample std of 1..9 is sqrt(60/8)
        assert!((s.std - (60.0f64 / 8.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_quartile_interpolation() {
        use approx::assert_relative_eq;

        let values = [1.0, 2.0, 3.0, 4.0];
        let s = NumericSummary::from_values(&values).unwrap();
        assert_relative_eq!(s.q1, 1.75);
        assert_relative_eq!(s.median, 2.5);
        assert_relative_eq!(s.q3, 3.25);
    }

    #[test]
    fn test_outlier_fences() {
        // q1=3, q3=7, iqr=4 -> fences at -3 and 13; 100 is out
        let mut values: Vec<f64> = (1..=9).map(f64::from).collect();
        values[8] = 100.0;
        let s = NumericSummary::from_values(&values).unwrap();
        assert_eq!(s.outliers, 1);
        let (low, high) = s.fences();
        assert!(low < values[0] && high < 100.0);
    }

    #[test]
    fn test_single_value_summary() {
        let s = NumericSummary::from_values(&[42.0]).unwrap();
        assert_eq!(s.mean, 42.0);
        assert_eq!(s.std, 0.0);
        assert_eq!(s.min, s.max);
        assert_eq!(s.outliers, 0);
    }

    #[test]
    fn test_empty_summary_undefined() {
        let err = NumericSummary::from_values(&[]).unwrap_err();
        assert!(matches!(err, Error::UndefinedMetric { .. }));
    }

    #[test]
    fn test_summary_skips_missing_cells() {
        let column = Column::new("x", vec![1.0.into(), Value::Missing, 3.0.into()]);
        let s = NumericSummary::from_column(&column).unwrap();
        assert_eq!(s.mean, 2.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
    }

    #[test]
    fn test_frequency_table() {
        let column = Column::text("sex", &["m", "f", "m", "m"]);
        let summary = CategoricalSummary::from_column(&column);
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].value, "m");
        assert_eq!(summary.rows[0].count, 3);
        assert!((summary.rows[0].frequency - 0.75).abs() < 1e-12);
        assert_eq!(summary.rows[1].value, "f");
    }

    #[test]
    fn test_frequency_table_counts_missing() {
        let column = Column::new("x", vec![Value::Missing, 1.0.into(), Value::Missing]);
        let summary = CategoricalSummary::from_column(&column);
        assert_eq!(summary.rows[0].value, "<missing>");
        assert_eq!(summary.rows[0].count, 2);
    }

    #[test]
    fn test_frequency_ties_keep_first_seen_order() {
        let column = Column::text("x", &["b", "a", "b", "a"]);
        let summary = CategoricalSummary::from_column(&column);
        assert_eq!(summary.rows[0].value, "b");
        assert_eq!(summary.rows[1].value, "a");
    }
}
