//! Triage context and request pipeline
//!
//! The context bundles everything a request needs — vocabulary, predictor,
//! severity map, configuration — and is built once at startup. It is
//! immutable afterwards, so callers may share it across threads freely and
//! tests construct one around a mock predictor. Each request runs
//! synchronously through a fixed sequence of stages:
//!
//! ```text
//! Selection → Validation → Encoding → Prediction → Severity → Report
//! ```
//!
//! Validation short-circuits: an empty selection is reported back to the
//! user as a warning and never reaches the predictor.

use std::path::Path;
use std::time::Instant;

use crate::config::TriageConfig;
use crate::dataset;
use crate::encoding::encode_selection;
use crate::error::TriageError;
use crate::model::forest::RandomForest;
use crate::model::Predictor;
use crate::triage::advisory::{advisory_for, is_low_confidence, low_confidence_caution};
use crate::triage::report::{TriageMetadata, TriageReport};
use crate::triage::severity::SeverityMap;
use crate::vocabulary::SymptomVocabulary;

/// Everything a triage request needs, built once at startup
pub struct TriageContext {
    vocabulary: SymptomVocabulary,
    predictor: Box<dyn Predictor>,
    severity: SeverityMap,
    config: TriageConfig,
}

impl TriageContext {
    /// Build a context from its parts
    ///
    /// # Arguments
    ///
    /// * `vocabulary` - Symptom vocabulary the feature vectors align to
    /// * `predictor` - Classifier invoked per request
    /// * `severity` - Label→tier grading map
    /// * `config` - Evaluation parameters
    ///
    /// # Errors
    ///
    /// Returns `TriageError::DimensionMismatch` if the vocabulary size does
    /// not match the predictor's input width. A vector encoded against a
    /// vocabulary the predictor was not trained on would silently mean the
    /// wrong symptoms, so the mismatch is fatal here instead.
    pub fn new(
        vocabulary: SymptomVocabulary,
        predictor: Box<dyn Predictor>,
        severity: SeverityMap,
        config: TriageConfig,
    ) -> Result<Self, TriageError> {
        if predictor.n_features() != vocabulary.len() {
            return Err(TriageError::DimensionMismatch {
                expected: predictor.n_features(),
                actual: vocabulary.len(),
            });
        }

        Ok(Self {
            vocabulary,
            predictor,
            severity,
            config,
        })
    }

    /// Build a context from a model artifact and a training dataset
    ///
    /// The startup path: loads the forest, recovers the vocabulary from the
    /// dataset header, and installs the default severity map.
    ///
    /// # Arguments
    ///
    /// * `model_path` - JSON forest artifact
    /// * `dataset_path` - Training dataset whose header names the symptoms
    /// * `config` - Evaluation parameters
    ///
    /// # Errors
    ///
    /// Returns `TriageError::ModelError` or `TriageError::DatasetError` if
    /// either file is missing or malformed, and
    /// `TriageError::DimensionMismatch` if the two disagree on the feature
    /// count. All are fatal startup conditions.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use symptom_triage::{TriageConfig, TriageContext};
    ///
    /// let context = TriageContext::from_files(
    ///     Path::new("data/disease_model.json"),
    ///     Path::new("data/training.csv"),
    ///     TriageConfig::default(),
    /// )?;
    /// # Ok::<(), symptom_triage::TriageError>(())
    /// ```
    pub fn from_files(
        model_path: &Path,
        dataset_path: &Path,
        config: TriageConfig,
    ) -> Result<Self, TriageError> {
        let forest = RandomForest::load(model_path)?;
        let vocabulary = dataset::load_vocabulary(dataset_path, &config.label_column)?;

        Self::new(vocabulary, Box::new(forest), SeverityMap::default(), config)
    }

    /// Vocabulary the context encodes against
    pub fn vocabulary(&self) -> &SymptomVocabulary {
        &self.vocabulary
    }

    /// Evaluation parameters
    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Evaluate one symptom selection
    ///
    /// Runs the full request pipeline: validation, encoding, prediction,
    /// severity grading, report assembly. Deterministic for a fixed
    /// context: the same selection yields the same diagnosis, confidence,
    /// and tier.
    ///
    /// # Arguments
    ///
    /// * `selection` - Selected symptom names
    ///
    /// # Returns
    ///
    /// A [`TriageReport`] with the diagnosis, confidence, severity tier,
    /// advisory text, and confidence warnings
    ///
    /// # Errors
    ///
    /// Returns `TriageError::EmptySelection` for an empty selection (a
    /// recoverable, user-visible warning; no prediction is made) and
    /// `TriageError::UnknownSymptom` for a name outside the vocabulary.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use symptom_triage::{TriageConfig, TriageContext};
    ///
    /// let context = TriageContext::from_files(
    ///     Path::new("data/disease_model.json"),
    ///     Path::new("data/training.csv"),
    ///     TriageConfig::default(),
    /// )?;
    ///
    /// let report = context.evaluate(&["fever", "cough"])?;
    /// println!(
    ///     "{} ({:.0}%) -> {}",
    ///     report.diagnosis,
    ///     report.confidence * 100.0,
    ///     report.severity.label()
    /// );
    /// # Ok::<(), symptom_triage::TriageError>(())
    /// ```
    pub fn evaluate<S: AsRef<str>>(&self, selection: &[S]) -> Result<TriageReport, TriageError> {
        let start = Instant::now();

        log::debug!("Evaluating selection of {} symptoms", selection.len());

        // Validation: an empty selection never reaches the predictor
        if selection.is_empty() {
            log::warn!("Rejecting empty symptom selection");
            return Err(TriageError::EmptySelection);
        }

        // Encoding
        let vector = encode_selection(&self.vocabulary, selection)?;

        // Prediction
        let diagnosis = self.predictor.predict(&vector)?;
        let confidence = self.predictor.predict_confidence(&vector)?;

        // Severity grading
        let severity = self.severity.classify(&diagnosis);
        let advisory = advisory_for(severity).to_string();

        let mut confidence_warnings = Vec::new();
        if is_low_confidence(confidence, self.config.low_confidence_threshold) {
            confidence_warnings.push(low_confidence_caution(confidence));
        }

        log::debug!(
            "Classified \"{}\" (confidence {:.2}) as {} severity",
            diagnosis,
            confidence,
            severity.label()
        );

        Ok(TriageReport {
            diagnosis,
            confidence,
            severity,
            advisory,
            metadata: TriageMetadata {
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                symptoms_selected: selection.len(),
                processing_time_ms: start.elapsed().as_secs_f32() * 1000.0,
                confidence_warnings,
            },
        })
    }
}
