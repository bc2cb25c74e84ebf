//! Terminal-rendered figures
//!
//! Each figure is a plain value type with a `render` method returning a
//! `String`; the caller decides where it goes. Colors follow the
//! [`ColorMode`](super::color::ColorMode) passed at render time.

mod distribution;
mod heatmap;
mod missing;


pub use distribution::{DistributionChart, Histogram};
pub use heatmap::CorrelationHeatmap;
pub use missing::MissingRateChart;
