//! Configuration parameters for triage evaluation

use crate::dataset::DEFAULT_LABEL_COLUMN;
use crate::triage::advisory::DEFAULT_LOW_CONFIDENCE_THRESHOLD;

/// Triage configuration parameters
#[derive(Debug, Clone)]
pub struct TriageConfig {
    /// Confidence below this threshold adds a low-confidence caution to the
    /// report (default: 0.5)
    ///
    /// The prediction is still reported; the caution only qualifies it.
    pub low_confidence_threshold: f32,

    /// Name of the column holding the disease label in the training dataset
    /// (default: "prognosis")
    ///
    /// Every other header column is treated as a symptom name.
    pub label_column: String,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            low_confidence_threshold: DEFAULT_LOW_CONFIDENCE_THRESHOLD,
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
        }
    }
}
