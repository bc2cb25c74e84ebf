//! Dataset profiler and report renderer

use std::fmt::Write as _;
use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::charts::{CorrelationHeatmap, DistributionChart, MissingRateChart};
use super::color::{random_color, ColorMode};
use super::frame::DataFrame;
use super::schema::{ColumnKind, Schema, SchemaOptions};
use super::stats::{CategoricalSummary, NumericSummary};

/// Computes a [`ProfileSummary`] for a frame
#[derive(Clone, Debug, Default)]
pub struct Profiler {
    options: SchemaOptions,
}

impl Profiler {
    /// Profiler with the default schema options
    pub fn new() -> Self {
        Self::default()
    }

    /// Profiler with explicit schema options
    pub fn with_options(options: SchemaOptions) -> Self {
        Self { options }
    }

    /// Profile a frame: schema split, per-column summaries, missing and
    /// duplicate accounting, and the figure data
    ///
    /// Pure; rendering is a separate step so callers can test or export the
    /// summary without producing any output.
    ///
    /// # Errors
    /// [`crate::Error::UndefinedMetric`] if a numeric column holds no
    /// values at all; schema inference over the same frame never produces
    /// one.
    pub fn profile(&self, frame: &DataFrame) -> Result<ProfileSummary> {
        let schema = Schema::infer(frame, &self.options);

        let mut categorical = Vec::new();
        let mut numeric = Vec::new();
        let mut distributions = Vec::new();
        let mut numeric_columns = Vec::new();

        for column in frame.columns() {
            match schema.kind_of(column.name()) {
                Some(ColumnKind::Categorical) => {
                    categorical
                        .push((column.name().to_string(), CategoricalSummary::from_column(column)));
                }
                Some(ColumnKind::Numeric) => {
                    let summary = NumericSummary::from_column(column)?;
                    numeric.push((column.name().to_string(), summary));
                    distributions.push(DistributionChart::new(
                        column.name(),
                        &column.numbers(),
                        summary,
                    ));
                    numeric_columns.push(column);
                }
                _ => {}
            }
        }

        let n_rows = frame.n_rows();
        let missing_rates = frame
            .columns()
            .iter()
            .map(|c| {
                let rate =
                    if n_rows == 0 { 0.0 } else { c.missing_count() as f64 / n_rows as f64 };
                (c.name().to_string(), rate)
            })
            .collect();

        Ok(ProfileSummary {
            n_rows,
            n_cols: frame.n_cols(),
            schema,
            categorical,
            numeric,
            missing_cells: frame.missing_cells(),
            missing_rates,
            duplicate_rows: frame.duplicate_row_count(),
            correlation: CorrelationHeatmap::from_columns(&numeric_columns),
            distributions,
        })
    }
}

/// How a summary is rendered
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    /// Color handling for the figures; `Mono` emits plain text
    pub color_mode: ColorMode,
    /// Seed for the per-figure random tints; `None` draws from the OS
    pub seed: Option<u64>,
}

/// Everything the profiler computed for one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub n_rows: usize,
    pub n_cols: usize,
    /// Column kinds, in frame order
    pub schema: Schema,
    /// Frequency tables for the categorical columns, in frame order
    pub categorical: Vec<(String, CategoricalSummary)>,
    /// Descriptive statistics for the numeric columns, in frame order
    pub numeric: Vec<(String, NumericSummary)>,
    /// Total missing cells across the frame
    pub missing_cells: usize,
    /// Per-column missing rate, in frame order, complete columns included
    pub missing_rates: Vec<(String, f64)>,
    /// Rows that duplicate an earlier row
    pub duplicate_rows: usize,
    /// Pearson matrix over numeric columns; `None` with fewer than two
    pub correlation: Option<CorrelationHeatmap>,
    /// Histogram+boxplot data, one per numeric column
    pub distributions: Vec<DistributionChart>,
}

impl ProfileSummary {
    /// Write the full report: shape, column split, frequency tables, the
    /// numeric statistics table, missing/duplicate counts, then the figures
    ///
    /// # Errors
    /// [`crate::Error::Io`] if the sink fails.
    pub fn render<W: io::Write>(&self, sink: &mut W, options: &RenderOptions) -> Result<()> {
        writeln!(sink, "{} rows, {} columns", self.n_rows, self.n_cols)?;
        writeln!(sink)?;

        self.render_schema_split(sink)?;
        self.render_categorical_tables(sink)?;
        self.render_numeric_table(sink)?;
        self.render_missing_and_duplicates(sink)?;
        self.render_figures(sink, options)?;

        Ok(())
    }

    fn render_schema_split<W: io::Write>(&self, sink: &mut W) -> Result<()> {
        for (label, kind) in [
            ("Categorical columns", ColumnKind::Categorical),
            ("Numeric columns", ColumnKind::Numeric),
            ("Text columns", ColumnKind::Text),
        ] {
            writeln!(sink, "{label}: {:?}", self.schema.columns_of_kind(kind))?;
        }
        writeln!(sink)?;
        Ok(())
    }

    fn render_categorical_tables<W: io::Write>(&self, sink: &mut W) -> Result<()> {
        if self.categorical.is_empty() {
            return Ok(());
        }
        writeln!(sink, "Statistics for categorical columns:")?;
        for (name, summary) in &self.categorical {
            writeln!(sink, "  {name:?}:")?;
            writeln!(sink, "  {:>12} {:>7} {:>10}", "value", "count", "frequency")?;
            for row in &summary.rows {
                writeln!(
                    sink,
                    "  {:>12} {:>7} {:>10.3}",
                    row.value, row.count, row.frequency
                )?;
            }
        }
        writeln!(sink)?;
        Ok(())
    }

    fn render_numeric_table<W: io::Write>(&self, sink: &mut W) -> Result<()> {
        if self.numeric.is_empty() {
            return Ok(());
        }

        writeln!(sink, "Statistics for numeric columns:")?;
        let mut header = format!("{:<15}", "");
        for (name, _) in &self.numeric {
            let _ = write!(header, " {name:>12}");
        }
        writeln!(sink, "{header}")?;

        type StatRow = (&'static str, fn(&NumericSummary) -> f64);
        let rows: [StatRow; 7] = [
            ("mean", |s| s.mean),
            ("std", |s| s.std),
            ("min", |s| s.min),
            ("q1", |s| s.q1),
            ("median", |s| s.median),
            ("q3", |s| s.q3),
            ("max", |s| s.max),
        ];
        for (label, stat) in rows {
            let mut line = format!("{label:<15}");
            for (_, summary) in &self.numeric {
                let _ = write!(line, " {:>12.3}", stat(summary));
            }
            writeln!(sink, "{line}")?;
        }

        let mut line = format!("{:<15}", "outliers count");
        for (_, summary) in &self.numeric {
            let _ = write!(line, " {:>12}", summary.outliers);
        }
        writeln!(sink, "{line}")?;
        writeln!(sink)?;
        Ok(())
    }

    fn render_missing_and_duplicates<W: io::Write>(&self, sink: &mut W) -> Result<()> {
        writeln!(
            sink,
            "Total {} missing values across {} rows",
            self.missing_cells, self.n_rows
        )?;
        let with_missing: Vec<&str> = self
            .missing_rates
            .iter()
            .filter(|&&(_, rate)| rate > 0.0)
            .map(|(name, _)| name.as_str())
            .collect();
        if !with_missing.is_empty() {
            writeln!(sink, "Columns with missing values: {}", with_missing.join(", "))?;
        }
        writeln!(sink, "Duplicated rows: {}", self.duplicate_rows)?;
        writeln!(sink)?;
        Ok(())
    }

    fn render_figures<W: io::Write>(&self, sink: &mut W, options: &RenderOptions) -> Result<()> {
        let missing = MissingRateChart::new(self.missing_rates.iter().cloned());
        sink.write_all(missing.render(options.color_mode).as_bytes())?;
        writeln!(sink)?;

        if let Some(heatmap) = &self.correlation {
            sink.write_all(heatmap.render(options.color_mode).as_bytes())?;
            writeln!(sink)?;
        }

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        for chart in &self.distributions {
            let tint = random_color(&mut rng);
            sink.write_all(chart.render(tint, options.color_mode).as_bytes())?;
            writeln!(sink)?;
        }

        Ok(())
    }
}

/// Profile a frame and print the full report to stdout
///
/// Color capability is detected from the environment; figures get fresh
/// random tints on every run.
///
/// # Errors
/// Propagates profiling errors and stdout write failures.
pub fn run_eda(frame: &DataFrame) -> Result<()> {
    let summary = Profiler::new().profile(frame)?;
    let options = RenderOptions { color_mode: ColorMode::detect(), seed: None };
    summary.render(&mut io::stdout(), &options)
}
