//! Prediction modules
//!
//! The classifier is an opaque collaborator behind a trait: the pipeline
//! only needs a label and a confidence for a fixed-width feature vector,
//! and tests substitute mock predictors freely. The bundled implementation
//! evaluates a serialized random-forest artifact.

pub mod forest;

use serde::{Deserialize, Serialize};

use crate::error::TriageError;

/// A predicted disease label with its confidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted disease label
    pub label: String,

    /// Confidence in the predicted label (0.0-1.0)
    pub confidence: f32,
}

/// Opaque classifier over fixed-width feature vectors
///
/// Implementations must be deterministic for a fixed model: the same vector
/// always yields the same label and confidence.
pub trait Predictor: Send + Sync {
    /// Input width the predictor expects
    fn n_features(&self) -> usize;

    /// Predict the disease label for one feature vector
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidInput` if the vector width does not
    /// match `n_features`, or `TriageError::ModelError` on an internally
    /// inconsistent model.
    fn predict(&self, vector: &[f32]) -> Result<String, TriageError>;

    /// Probability of the predicted label for one feature vector (0.0-1.0)
    ///
    /// # Errors
    ///
    /// Same conditions as [`Predictor::predict`].
    fn predict_confidence(&self, vector: &[f32]) -> Result<f32, TriageError>;
}
