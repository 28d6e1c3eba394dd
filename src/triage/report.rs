//! Triage report types

use serde::{Deserialize, Serialize};

use crate::triage::severity::SeverityTier;

/// Structured outcome of one triage evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    /// Predicted disease label
    pub diagnosis: String,

    /// Confidence in the prediction (0.0-1.0)
    pub confidence: f32,

    /// Referral severity tier
    pub severity: SeverityTier,

    /// User-facing referral advisory
    pub advisory: String,

    /// Report metadata
    pub metadata: TriageMetadata,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageMetadata {
    /// Engine version
    pub engine_version: String,

    /// Number of symptoms in the evaluated selection
    pub symptoms_selected: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Confidence warnings (low confidence etc.)
    pub confidence_warnings: Vec<String>,
}

impl Default for TriageMetadata {
    fn default() -> Self {
        Self {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            symptoms_selected: 0,
            processing_time_ms: 0.0,
            confidence_warnings: vec![],
        }
    }
}
