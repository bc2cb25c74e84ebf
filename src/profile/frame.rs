//! Tabular dataset with named, mixed-type columns

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One cell of a column
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A numeric cell
    Number(f64),
    /// A free-text cell
    Text(String),
    /// An absent cell
    Missing,
}

impl Value {
    /// Whether the cell is absent
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// The numeric content, if any
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            _ => None,
        }
    }

    /// Equality/grouping key; numbers compare by bit pattern so NaN
    /// collapses to one bucket
    fn key(&self) -> ValueKey {
        match self {
            Value::Number(x) => ValueKey::Number(x.to_bits()),
            Value::Text(s) => ValueKey::Text(s.clone()),
            Value::Missing => ValueKey::Missing,
        }
    }

    /// Label used in frequency tables and reports
    pub fn label(&self) -> String {
        match self {
            Value::Number(x) => format!("{x}"),
            Value::Text(s) => s.clone(),
            Value::Missing => "<missing>".to_string(),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Missing, Into::into)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum ValueKey {
    Number(u64),
    Text(String),
    Missing,
}

/// A named column of cells
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    /// Create a column from raw cells
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self { name: name.into(), values }
    }

    /// Create an all-numeric column
    pub fn numeric(name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(name, values.iter().map(|&x| Value::Number(x)).collect())
    }

    /// Create an all-text column
    pub fn text(name: impl Into<String>, values: &[&str]) -> Self {
        Self::new(name, values.iter().map(|&s| Value::from(s)).collect())
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw cells
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of cells, missing included
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no cells
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing cells
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Number of distinct non-missing values
    pub fn distinct_count(&self) -> usize {
        let mut seen = HashSet::new();
        for value in &self.values {
            if !value.is_missing() {
                seen.insert(value.key());
            }
        }
        seen.len()
    }

    /// The non-missing numeric cells, in row order
    pub fn numbers(&self) -> Vec<f64> {
        self.values.iter().filter_map(Value::as_number).collect()
    }

    /// Whether every non-missing cell is a number
    pub fn is_numeric(&self) -> bool {
        self.values.iter().all(|v| !matches!(v, Value::Text(_)))
    }
}

/// An ordered collection of equal-length named columns
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from columns
    ///
    /// # Errors
    /// [`Error::InvalidInput`] on duplicate column names or ragged lengths.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut frame = Self::new();
        for column in columns {
            frame.add_column(column)?;
        }
        Ok(frame)
    }

    /// Append a column
    ///
    /// # Errors
    /// [`Error::InvalidInput`] when a column with the same name exists or
    /// the length differs from the columns already present.
    pub fn add_column(&mut self, column: Column) -> Result<()> {
        if self.columns.iter().any(|c| c.name == column.name) {
            return Err(Error::InvalidInput(format!(
                "duplicate column name: {:?}",
                column.name
            )));
        }
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(Error::InvalidInput(format!(
                    "column {:?} has {} rows, frame has {}",
                    column.name,
                    column.len(),
                    first.len()
                )));
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// All columns in frame order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Total number of missing cells across the frame
    pub fn missing_cells(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }

    /// Number of rows that duplicate an earlier row
    ///
    /// Rows compare cell-by-cell across all columns; missing cells compare
    /// equal to each other.
    pub fn duplicate_row_count(&self) -> usize {
        let n_rows = self.n_rows();
        if n_rows == 0 {
            return 0;
        }
        let mut seen = HashSet::with_capacity(n_rows);
        for row in 0..n_rows {
            let key: Vec<ValueKey> =
                self.columns.iter().map(|c| c.values[row].key()).collect();
            seen.insert(key);
        }
        n_rows - seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> DataFrame {
        DataFrame::from_columns(vec![
            Column::new(
                "age",
                vec![22.0.into(), Value::Missing, 35.0.into(), 22.0.into()],
            ),
            Column::text("city", &["Oslo", "Lima", "Oslo", "Oslo"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_shape() {
        let frame = sample_frame();
        assert_eq!(frame.n_rows(), 4);
        assert_eq!(frame.n_cols(), 2);
    }

    #[test]
    fn test_missing_and_distinct_counts() {
        let frame = sample_frame();
        let age = frame.column("age").unwrap();
        assert_eq!(age.missing_count(), 1);
        assert_eq!(age.distinct_count(), 2);
        assert_eq!(frame.missing_cells(), 1);
    }

    #[test]
    fn test_numbers_skip_missing() {
        let frame = sample_frame();
        assert_eq!(frame.column("age").unwrap().numbers(), vec![22.0, 35.0, 22.0]);
    }

    #[test]
    fn test_is_numeric() {
        let frame = sample_frame();
        assert!(frame.column("age").unwrap().is_numeric());
        assert!(!frame.column("city").unwrap().is_numeric());
    }

    #[test]
    fn test_duplicate_rows() {
        let frame = DataFrame::from_columns(vec![
            Column::numeric("a", &[1.0, 2.0, 1.0, 1.0]),
            Column::text("b", &["x", "y", "x", "x"]),
        ])
        .unwrap();
        // Rows 2 and 3 repeat row 0
        assert_eq!(frame.duplicate_row_count(), 2);
    }

    #[test]
    fn test_duplicate_rows_missing_compares_equal() {
        let frame = DataFrame::from_columns(vec![Column::new(
            "a",
            vec![Value::Missing, Value::Missing, 1.0.into()],
        )])
        .unwrap();
        assert_eq!(frame.duplicate_row_count(), 1);
    }

    #[test]
    fn test_ragged_column_rejected() {
        let mut frame = DataFrame::new();
        frame.add_column(Column::numeric("a", &[1.0, 2.0])).unwrap();
        let err = frame.add_column(Column::numeric("b", &[1.0])).unwrap_err();
        assert!(format!("{err}").contains("has 1 rows, frame has 2"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut frame = DataFrame::new();
        frame.add_column(Column::numeric("a", &[1.0])).unwrap();
        assert!(frame.add_column(Column::numeric("a", &[2.0])).is_err());
    }

    #[test]
    fn test_value_labels() {
        assert_eq!(Value::Number(1.0).label(), "1");
        assert_eq!(Value::Number(2.5).label(), "2.5");
        assert_eq!(Value::from("x").label(), "x");
        assert_eq!(Value::Missing.label(), "<missing>");
    }

    #[test]
    fn test_value_from_option() {
        assert_eq!(Value::from(Some(1.5)), Value::Number(1.5));
        assert_eq!(Value::from(None::<f64>), Value::Missing);
    }
}
