//! Error types for the triage engine

use std::fmt;

/// Errors that can occur during triage
#[derive(Debug, Clone, PartialEq)]
pub enum TriageError {
    /// Invalid input parameters
    InvalidInput(String),

    /// Training dataset could not be read or parsed
    DatasetError(String),

    /// Model artifact could not be loaded or is malformed
    ModelError(String),

    /// A selected symptom is not part of the vocabulary
    UnknownSymptom(String),

    /// No symptoms were selected
    EmptySelection,

    /// Vocabulary size does not match the predictor's input width
    DimensionMismatch {
        /// Input width the predictor was trained on
        expected: usize,
        /// Vocabulary size recovered from the dataset
        actual: usize,
    },
}

impl fmt::Display for TriageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriageError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            TriageError::DatasetError(msg) => write!(f, "Dataset error: {}", msg),
            TriageError::ModelError(msg) => write!(f, "Model error: {}", msg),
            TriageError::UnknownSymptom(name) => {
                write!(f, "Unknown symptom: \"{}\" is not in the vocabulary", name)
            }
            TriageError::EmptySelection => {
                write!(f, "Empty selection: select at least one symptom")
            }
            TriageError::DimensionMismatch { expected, actual } => write!(
                f,
                "Dimension mismatch: predictor expects {} features, vocabulary has {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for TriageError {}
