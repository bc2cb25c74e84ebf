//! Correlation heatmap over numeric columns

use std::fmt::Write as _;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::profile::color::{ColorMode, Rgb, Styled};
use crate::profile::frame::Column;

/// Pairwise Pearson correlation matrix, rendered as a shaded grid
///
/// Correlations use pairwise-complete observations: for each column pair,
/// only the rows where both cells are numeric contribute. Pairs with fewer
/// than two complete rows, or with a constant side, come out as NaN.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrelationHeatmap {
    names: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl CorrelationHeatmap {
    /// Compute the matrix over the given numeric columns
    ///
    /// Returns `None` when fewer than two columns are given; a heatmap of
    /// one cell says nothing.
    pub fn from_columns(columns: &[&Column]) -> Option<Self> {
        if columns.len() < 2 {
            return None;
        }

        let names = columns.iter().map(|c| c.name().to_string()).collect();
        let n = columns.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let r = if i == j { 1.0 } else { pairwise_pearson(columns[i], columns[j]) };
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        Some(Self { names, values })
    }

    /// Column names, matrix order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Correlation between columns `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }

    /// Render to string
    pub fn render(&self, mode: ColorMode) -> String {
        let label_width = self.names.iter().map(String::len).max().unwrap_or(4).min(10);

        let mut out = String::from("Correlation heatmap\n");
        out.push_str(&" ".repeat(label_width + 2));
        for name in &self.names {
            let _ = write!(out, " {:>7}", truncate(name, 7));
        }
        out.push('\n');

        for (i, row) in self.values.iter().enumerate() {
            let _ = write!(out, "  {:>label_width$}", truncate(&self.names[i], label_width));
            for &r in row {
                let cell = format!(" {} {:>5.2}", shade(r), r);
                let _ = write!(out, "{}", Styled::new(&cell, mode).fg(diverging_color(r)));
            }
            out.push('\n');
        }
        out
    }
}

/// Shade block by correlation strength
fn shade(r: f64) -> char {
    match r.abs() {
        x if x.is_nan() => ' ',
        x if x >= 0.75 => '█',
        x if x >= 0.5 => '▓',
        x if x >= 0.25 => '▒',
        _ => '░',
    }
}

/// Blue for negative, red for positive, grey around zero
fn diverging_color(r: f64) -> Rgb {
    if r.is_nan() {
        return Rgb::new(128, 128, 128);
    }
    let t = (r.abs().min(1.0) * 155.0) as u8;
    if r < 0.0 {
        Rgb::new(100, 100, 100 + t)
    } else {
        Rgb::new(100 + t, 100, 100)
    }
}

fn truncate(s: &str, width: usize) -> &str {
    let end = s.char_indices().nth(width).map_or(s.len(), |(i, _)| i);
    &s[..end]
}

/// Pearson correlation over the rows where both columns are numeric
fn pairwise_pearson(a: &Column, b: &Column) -> f64 {
    let (xs, ys): (Vec<f64>, Vec<f64>) = a
        .values()
        .iter()
        .zip(b.values().iter())
        .filter_map(|(va, vb)| Some((va.as_number()?, vb.as_number()?)))
        .unzip();

    if xs.len() < 2 {
        return f64::NAN;
    }

    let x = Array1::from_vec(xs);
    let y = Array1::from_vec(ys);
    let mx = x.mean().unwrap_or(0.0);
    let my = y.mean().unwrap_or(0.0);
    let xc = &x - mx;
    let yc = &y - my;

    let denom = (xc.dot(&xc) * yc.dot(&yc)).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    xc.dot(&yc) / denom
}

/// The matrix as an `ndarray` array, for callers doing further numerics
impl From<&CorrelationHeatmap> for Array2<f64> {
    fn from(heatmap: &CorrelationHeatmap) -> Self {
        let n = heatmap.names.len();
        Array2::from_shape_fn((n, n), |(i, j)| heatmap.values[i][j])
    }
}
