//! # Symptom Triage
//!
//! A decision-support engine that turns a sparse symptom selection into a
//! referral recommendation: it encodes the selection as a fixed-order
//! feature vector, obtains a disease label and confidence from a serialized
//! ensemble classifier, grades the label into a severity tier, and emits a
//! structured triage report.
//!
//! ## Features
//!
//! - **Vocabulary recovery**: symptom names read once from the training
//!   dataset's header, with O(1) name→index lookup
//! - **Vector encoding**: sparse selection → fixed-order {0,1} vector, with
//!   typed errors for unknown symptoms
//! - **Ensemble inference**: majority-vote evaluation of a random-forest
//!   artifact loaded from disk, behind a mockable [`Predictor`] trait
//! - **Severity grading**: data-driven hospital/clinic referral tiers with
//!   a safe default for unlisted conditions
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use symptom_triage::{TriageConfig, TriageContext};
//!
//! let context = TriageContext::from_files(
//!     Path::new("data/disease_model.json"),
//!     Path::new("data/training.csv"),
//!     TriageConfig::default(),
//! )?;
//!
//! let report = context.evaluate(&["fever", "cough"])?;
//!
//! println!(
//!     "{} (confidence {:.0}%) -> {} severity",
//!     report.diagnosis,
//!     report.confidence * 100.0,
//!     report.severity.label()
//! );
//! # Ok::<(), symptom_triage::TriageError>(())
//! ```
//!
//! ## Architecture
//!
//! The context is assembled once at startup and shared read-only; every
//! request runs the same synchronous pipeline:
//!
//! ```text
//! Dataset header → Vocabulary ─┐
//!                              ├─ TriageContext (immutable)
//! Model artifact → Predictor ──┘
//!
//! Selection → Validation → Encoding → Prediction → Severity → Report
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod dataset;
pub mod encoding;
pub mod error;
pub mod model;
pub mod triage;
pub mod vocabulary;

// Re-export main types
pub use config::TriageConfig;
pub use context::TriageContext;
pub use error::TriageError;
pub use model::forest::RandomForest;
pub use model::{Prediction, Predictor};
pub use triage::report::{TriageMetadata, TriageReport};
pub use triage::severity::{SeverityMap, SeverityTier};
pub use vocabulary::SymptomVocabulary;
