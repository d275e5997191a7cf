//! Derived metric settings

use serde::{Deserialize, Serialize};

/// Settings for the metric calculators
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Training sessions per player that count as 100% development progress.
    /// Unset means progress is reported as not implemented.
    #[serde(default)]
    pub training_target_sessions: Option<u32>,
}
