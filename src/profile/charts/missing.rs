//! Missing-value rate bar chart

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::profile::color::{ColorMode, Rgb, Styled};

const BLOCK_FULL: char = '█';
const BLOCK_LIGHT: char = '░';
const BAR_WIDTH: usize = 30;
const BAR_COLOR: Rgb = Rgb::new(255, 170, 200);

/// Bar chart of the per-column missing-value rate
///
/// Only columns that actually have missing cells get a bar, matching how
/// the profile report filters them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissingRateChart {
    entries: Vec<(String, f64)>,
}

impl MissingRateChart {
    /// Build from (column name, missing rate) pairs; rates outside [0, 1]
    /// are clamped
    pub fn new(rates: impl IntoIterator<Item = (String, f64)>) -> Self {
        let entries = rates
            .into_iter()
            .filter(|&(_, rate)| rate > 0.0)
            .map(|(name, rate)| (name, rate.clamp(0.0, 1.0)))
            .collect();
        Self { entries }
    }

    /// Whether no column has missing cells
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render to string
    pub fn render(&self, mode: ColorMode) -> String {
        let mut out = String::from("Missing values proportion\n");
        if self.entries.is_empty() {
            out.push_str("  (no missing values)\n");
            return out;
        }

        let name_width =
            self.entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0).max(4);

        for (name, rate) in &self.entries {
            let filled = (rate * BAR_WIDTH as f64).round() as usize;
            let bar = format!(
                "{}{}",
                BLOCK_FULL.to_string().repeat(filled),
                BLOCK_LIGHT.to_string().repeat(BAR_WIDTH - filled)
            );
            let _ = writeln!(
                out,
                "  {name:>name_width$} {} {:>5.1}%",
                Styled::new(&bar, mode).fg(BAR_COLOR),
                rate * 100.0
            );
        }
        out
    }
}
