//! Symptom-vector encoding
//!
//! Converts a sparse symptom selection into the fixed-order numeric vector
//! the predictor was trained on.
//!
//! Algorithm:
//! 1. Reject an empty selection
//! 2. Start from an all-zero vector of vocabulary width
//! 3. Set position i to 1.0 for every selected symptom at vocabulary index i
//!
//! # Example
//!
//! ```
//! use symptom_triage::encoding::encode_selection;
//! use symptom_triage::vocabulary::SymptomVocabulary;
//!
//! let vocabulary = SymptomVocabulary::new(vec![
//!     "fever".to_string(),
//!     "cough".to_string(),
//!     "fatigue".to_string(),
//! ])?;
//!
//! let vector = encode_selection(&vocabulary, &["fever", "cough"])?;
//! assert_eq!(vector, vec![1.0, 1.0, 0.0]);
//! # Ok::<(), symptom_triage::TriageError>(())
//! ```

use crate::error::TriageError;
use crate::vocabulary::SymptomVocabulary;

/// Encode a symptom selection as a fixed-order {0,1} vector
///
/// Pure function of (vocabulary, selection): the output has one slot per
/// vocabulary entry, 1.0 where the symptom was selected and 0.0 elsewhere.
/// Duplicate selection entries are idempotent.
///
/// # Arguments
///
/// * `vocabulary` - Vocabulary defining vector width and positions
/// * `selection` - Selected symptom names
///
/// # Returns
///
/// Feature vector of length `vocabulary.len()` with values in {0.0, 1.0}
///
/// # Errors
///
/// Returns `TriageError::EmptySelection` for an empty selection and
/// `TriageError::UnknownSymptom` for a name missing from the vocabulary;
/// an unknown name never silently corrupts the vector.
pub fn encode_selection<S: AsRef<str>>(
    vocabulary: &SymptomVocabulary,
    selection: &[S],
) -> Result<Vec<f32>, TriageError> {
    if selection.is_empty() {
        return Err(TriageError::EmptySelection);
    }

    let mut vector = vec![0.0; vocabulary.len()];

    for name in selection {
        let name = name.as_ref();
        match vocabulary.index_of(name) {
            Some(i) => vector[i] = 1.0,
            None => return Err(TriageError::UnknownSymptom(name.to_string())),
        }
    }

    log::debug!(
        "Encoded {} selected symptoms into a {}-wide vector",
        selection.len(),
        vector.len()
    );

    Ok(vector)
}
