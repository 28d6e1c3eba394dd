//! Integration tests for the triage engine
//!
//! Drive the file-based startup path against small fixtures: a training
//! table of four symptoms and a hand-built six-tree forest over three
//! conditions.

use std::io::Write;
use std::path::{Path, PathBuf};

use symptom_triage::dataset;
use symptom_triage::{
    Predictor, RandomForest, SeverityMap, SeverityTier, TriageConfig, TriageContext, TriageError,
};

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

fn fixture_context() -> TriageContext {
    TriageContext::from_files(
        &fixture_path("disease_model_small.json"),
        &fixture_path("training_small.csv"),
        TriageConfig::default(),
    )
    .expect("fixture context should load")
}

/// Fixed-answer predictor for driving report paths the fixture forest
/// cannot reach
struct StubPredictor {
    n_features: usize,
    label: String,
    confidence: f32,
}

impl Predictor for StubPredictor {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, _vector: &[f32]) -> Result<String, TriageError> {
        Ok(self.label.clone())
    }

    fn predict_confidence(&self, _vector: &[f32]) -> Result<f32, TriageError> {
        Ok(self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_recovers_vocabulary() {
        let context = fixture_context();

        assert_eq!(
            context.vocabulary().names(),
            &["fever", "cough", "fatigue", "headache"]
        );
    }

    #[test]
    fn test_hospital_referral_end_to_end() {
        let context = fixture_context();

        let report = context.evaluate(&["fever", "cough"]).unwrap();

        assert_eq!(report.diagnosis, "Dengue");
        assert_eq!(report.severity, SeverityTier::High);
        assert!(report.advisory.contains("hospital"));
        // 4 of 6 trees vote Dengue
        assert!((report.confidence - 4.0 / 6.0).abs() < 1e-6);
        assert!(report.metadata.confidence_warnings.is_empty());
    }

    #[test]
    fn test_clinic_referral_end_to_end() {
        let context = fixture_context();

        let report = context.evaluate(&["cough", "headache"]).unwrap();

        assert_eq!(report.diagnosis, "Common Cold");
        assert_eq!(report.severity, SeverityTier::Low);
        assert!(report.advisory.contains("clinic"));
        assert!((report.confidence - 5.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_unlisted_condition_grades_moderate() {
        let context = fixture_context();

        let report = context.evaluate(&["fatigue"]).unwrap();

        assert_eq!(report.diagnosis, "Unknown Syndrome");
        assert_eq!(report.severity, SeverityTier::Moderate);
        assert!(report.advisory.contains("physician"));
    }

    #[test]
    fn test_empty_selection_rejected_with_warning() {
        let context = fixture_context();

        let result = context.evaluate::<&str>(&[]);

        assert_eq!(result.unwrap_err(), TriageError::EmptySelection);
    }

    #[test]
    fn test_unknown_symptom_surfaced_to_user() {
        let context = fixture_context();

        let result = context.evaluate(&["fever", "itchy_antlers"]);

        assert_eq!(
            result.unwrap_err(),
            TriageError::UnknownSymptom("itchy_antlers".to_string())
        );
    }

    #[test]
    fn test_missing_model_file_is_fatal_startup_error() {
        let result = TriageContext::from_files(
            Path::new("no/such/model.json"),
            &fixture_path("training_small.csv"),
            TriageConfig::default(),
        );

        assert!(matches!(result, Err(TriageError::ModelError(_))));
    }

    #[test]
    fn test_missing_dataset_file_is_fatal_startup_error() {
        let result = TriageContext::from_files(
            &fixture_path("disease_model_small.json"),
            Path::new("no/such/training.csv"),
            TriageConfig::default(),
        );

        assert!(matches!(result, Err(TriageError::DatasetError(_))));
    }

    #[test]
    fn test_vocabulary_model_disagreement_is_fatal() {
        // Three symptom columns against a four-feature forest
        let mut dataset_file = tempfile::NamedTempFile::new().unwrap();
        dataset_file
            .write_all(b"fever,cough,fatigue,prognosis\n1,0,0,Dengue\n")
            .unwrap();

        let result = TriageContext::from_files(
            &fixture_path("disease_model_small.json"),
            dataset_file.path(),
            TriageConfig::default(),
        );

        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some(
                "Dimension mismatch: predictor expects 4 features, vocabulary has 3".to_string()
            )
        );
    }

    #[test]
    fn test_low_confidence_caution_attached_to_report() {
        let vocabulary = dataset::load_vocabulary(
            &fixture_path("training_small.csv"),
            dataset::DEFAULT_LABEL_COLUMN,
        )
        .unwrap();
        let predictor = StubPredictor {
            n_features: 4,
            label: "Dengue".to_string(),
            confidence: 0.35,
        };
        let context = TriageContext::new(
            vocabulary,
            Box::new(predictor),
            SeverityMap::default(),
            TriageConfig::default(),
        )
        .unwrap();

        let report = context.evaluate(&["fever"]).unwrap();

        assert_eq!(report.diagnosis, "Dengue");
        assert_eq!(report.severity, SeverityTier::High);
        assert_eq!(report.metadata.confidence_warnings.len(), 1);
        assert!(report.metadata.confidence_warnings[0].contains("35%"));
    }

    #[test]
    fn test_repeated_evaluations_agree() {
        let context = fixture_context();

        let first = context.evaluate(&["fever", "cough"]).unwrap();
        let second = context.evaluate(&["fever", "cough"]).unwrap();

        assert_eq!(first.diagnosis, second.diagnosis);
        assert_eq!(first.confidence, second.confidence);
        assert_eq!(first.severity, second.severity);
    }

    #[test]
    fn test_artifact_agrees_with_training_table() {
        let forest = RandomForest::load(&fixture_path("disease_model_small.json")).unwrap();
        let table = dataset::load_dataset(
            &fixture_path("training_small.csv"),
            dataset::DEFAULT_LABEL_COLUMN,
        )
        .unwrap();

        let rows: Vec<Vec<f32>> = table
            .records()
            .iter()
            .map(|record| record.features.clone())
            .collect();
        let predictions = forest.predict_batch(&rows).unwrap();

        let agreed = predictions
            .iter()
            .zip(table.records())
            .filter(|(prediction, record)| prediction.label == record.prognosis)
            .count();

        assert_eq!(agreed, table.len());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let context = fixture_context();

        let report = context.evaluate(&["fever", "cough"]).unwrap();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"diagnosis\":\"Dengue\""));
        assert!(json.contains("\"severity\":\"High\""));
    }
}
