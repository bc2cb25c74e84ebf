//! Histogram with marginal boxplot for one numeric column

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::profile::color::{ColorMode, Rgb, Styled};
use crate::profile::stats::NumericSummary;

const BLOCK_FULL: char = '█';
const STRIP_WIDTH: usize = 44;
const BAR_WIDTH: usize = 30;
const MAX_BINS: usize = 16;

/// Equal-width bin counts over a value range
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub counts: Vec<usize>,
    /// Bin edges; `counts.len() + 1` entries, first is min, last is max
    pub edges: Vec<f64>,
}

impl Histogram {
    /// Bin the values with the Sturges bin count, capped at 16
    ///
    /// All values land in a bin; the top edge is closed so the maximum is
    /// counted in the last bin. Constant data gets a single bin.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self { counts: Vec::new(), edges: Vec::new() };
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max == min {
            return Self { counts: vec![values.len()], edges: vec![min, max] };
        }

        let bins = ((values.len() as f64).log2().ceil() as usize + 1).clamp(1, MAX_BINS);
        let width = (max - min) / bins as f64;

        let mut counts = vec![0; bins];
        for &v in values {
            let idx = (((v - min) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let edges = (0..=bins).map(|i| min + width * i as f64).collect();
        Self { counts, edges }
    }
}

/// One figure: a boxplot strip over a histogram, as in the profile report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistributionChart {
    name: String,
    histogram: Histogram,
    summary: NumericSummary,
}

impl DistributionChart {
    /// Build the figure data for one column's values
    pub fn new(name: impl Into<String>, values: &[f64], summary: NumericSummary) -> Self {
        Self { name: name.into(), histogram: Histogram::from_values(values), summary }
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The binned counts
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Render to string, tinted with `color`
    pub fn render(&self, color: Rgb, mode: ColorMode) -> String {
        let mut out = format!("\"{}\" distribution\n", self.name);

        let strip = self.boxplot_strip();
        let _ = writeln!(out, "  {}", Styled::new(&strip, mode).fg(color));

        let max_count = self.histogram.counts.iter().copied().max().unwrap_or(0);
        if max_count == 0 {
            out.push_str("  (no values)\n");
            return out;
        }

        for (i, &count) in self.histogram.counts.iter().enumerate() {
            let filled = (count as f64 / max_count as f64 * BAR_WIDTH as f64).round() as usize;
            // Pad before styling so escape bytes don't skew the alignment
            let bar = format!("{:<BAR_WIDTH$}", BLOCK_FULL.to_string().repeat(filled));
            let _ = writeln!(
                out,
                "  [{:>9.3}, {:>9.3}{} {} {count}",
                self.histogram.edges[i],
                self.histogram.edges[i + 1],
                if i + 1 == self.histogram.counts.len() { "]" } else { ")" },
                Styled::new(&bar, mode).fg(color),
            );
        }
        out
    }

    /// One-line box-and-whisker strip scaled to the value range:
    /// whiskers span min to max, the box spans q1 to q3, `┃` marks the
    /// median
    fn boxplot_strip(&self) -> String {
        let s = &self.summary;
        let range = s.max - s.min;
        if range == 0.0 {
            return format!("├{}┤", "▓".repeat(STRIP_WIDTH));
        }

        let position = |v: f64| {
            (((v - s.min) / range) * (STRIP_WIDTH - 1) as f64).round() as usize
        };
        let (q1, median, q3) = (position(s.q1), position(s.median), position(s.q3));

        let mut strip: Vec<char> = (0..STRIP_WIDTH)
            .map(|i| {
                if i >= q1 && i <= q3 {
                    '▓'
                } else {
                    '─'
                }
            })
            .collect();
        strip[median] = '┃';

        format!("├{}┤", strip.into_iter().collect::<String>())
    }
}
