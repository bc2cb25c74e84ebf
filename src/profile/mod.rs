//! Exploratory dataset profiling
//!
//! Takes an in-memory [`DataFrame`] of named, mixed-type columns and
//! produces a profile: shape, a heuristic column-kind split, per-column
//! descriptive statistics, missing-value and duplicate accounting, and
//! terminal-rendered figures (missing-rate bars, correlation heatmap,
//! histogram+boxplot per numeric column).
//!
//! Computation and rendering are separate: [`Profiler::profile`] is pure
//! and returns a [`ProfileSummary`]; rendering writes to any `io::Write`
//! sink. [`run_eda`] wires both to stdout.
//!
//! # Example
//!
//! ```
//! use evaluar::profile::{Column, DataFrame, Profiler};
//!
//! let mut frame = DataFrame::new();
//! frame.add_column(Column::numeric("age", &[22.0, 35.0, 58.0, 35.0])).unwrap();
//! frame.add_column(Column::text("city", &["Oslo", "Lima", "Oslo", "Lima"])).unwrap();
//!
//! let summary = Profiler::new().profile(&frame).unwrap();
//! assert_eq!(summary.n_rows, 4);
//! ```

pub mod charts;
pub mod color;
pub mod frame;
pub mod report;
pub mod schema;
pub mod stats;


pub use charts::{CorrelationHeatmap, DistributionChart, Histogram, MissingRateChart};
pub use color::{random_color, ColorMode, Rgb, Styled};
pub use frame::{Column, DataFrame, Value};
pub use report::{run_eda, ProfileSummary, Profiler, RenderOptions};
pub use schema::{ColumnKind, Schema, SchemaOptions};
pub use stats::{CategoricalSummary, FrequencyRow, NumericSummary};
