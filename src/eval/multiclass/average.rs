//! Averaging strategies for multiclass metrics

use serde::{Deserialize, Serialize};

/// How per-class metrics are combined into one number
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Average {
    /// Unweighted mean over classes
    Macro,
    /// Mean weighted by support (number of true instances per class)
    Weighted,
}
