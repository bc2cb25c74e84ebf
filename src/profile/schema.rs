//! Column-kind classification

use serde::{Deserialize, Serialize};

use super::frame::{Column, DataFrame};

/// What kind of data a column holds, for profiling purposes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Few distinct values; summarized by frequency tables
    Categorical,
    /// Numeric with many distinct values; summarized by descriptive stats
    Numeric,
    /// Everything else (free text, mixed content)
    Text,
}

impl ColumnKind {
    /// Get the kind name as string
    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Categorical => "categorical",
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
        }
    }
}

/// Knobs for schema inference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaOptions {
    /// A column with at most this many distinct non-missing values is
    /// treated as categorical, whatever its storage type
    pub categorical_threshold: usize,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self { categorical_threshold: 6 }
    }
}

/// Inferred column kinds, in frame order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    entries: Vec<(String, ColumnKind)>,
}

impl Schema {
    /// Classify every column of a frame, once
    ///
    /// The distinct-value test wins over the storage type: a numeric column
    /// with few distinct values is categorical. Otherwise a column whose
    /// non-missing cells are all numbers is numeric, and anything else is
    /// text.
    pub fn infer(frame: &DataFrame, options: &SchemaOptions) -> Self {
        let entries = frame
            .columns()
            .iter()
            .map(|column| (column.name().to_string(), Self::classify(column, options)))
            .collect();
        Self { entries }
    }

    fn classify(column: &Column, options: &SchemaOptions) -> ColumnKind {
        if column.distinct_count() <= options.categorical_threshold {
            ColumnKind::Categorical
        } else if column.is_numeric() {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        }
    }

    /// All entries, in frame order
    pub fn entries(&self) -> &[(String, ColumnKind)] {
        &self.entries
    }

    /// The kind inferred for a column
    pub fn kind_of(&self, name: &str) -> Option<ColumnKind> {
        self.entries.iter().find(|(n, _)| n == name).map(|&(_, kind)| kind)
    }

    /// Names of the columns of one kind, in frame order
    pub fn columns_of_kind(&self, kind: ColumnKind) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|&&(_, k)| k == kind)
            .map(|(n, _)| n.as_str())
            .collect()
    }
}
